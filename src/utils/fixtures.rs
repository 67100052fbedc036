use crate::errors::Error;
use crate::state::{Row, SavedQuery};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

const FIXTURE_QUERIES: &str = include_str!("../../fixtures/queries.json");

#[derive(Deserialize)]
struct FixtureQuery {
    id: u64,
    title: String,
    query: String,
    #[serde(default)]
    data: Vec<Map<String, Value>>,
}

/// Seed queries bundled into the binary. Rows and their columns keep the
/// order the document lists them in.
pub fn load_fixture_queries() -> Result<Vec<SavedQuery>, Error> {
    parse_fixture_queries(FIXTURE_QUERIES)
}

fn parse_fixture_queries(data: &str) -> Result<Vec<SavedQuery>, Error> {
    let fixtures: Vec<FixtureQuery> = serde_json::from_str(data)?;

    let mut seen = HashSet::new();
    for fixture in &fixtures {
        if !seen.insert(fixture.id) {
            return Err(Error::InvalidInput(format!(
                "duplicate query id {}",
                fixture.id
            )));
        }
    }

    Ok(fixtures
        .into_iter()
        .map(|fixture| SavedQuery {
            id: fixture.id,
            title: fixture.title,
            text: fixture.query,
            rows: fixture.data.iter().map(object_to_row).collect(),
        })
        .collect())
}

fn object_to_row(object: &Map<String, Value>) -> Row {
    Row::new(
        object
            .iter()
            .map(|(column, value)| (column.clone(), scalar_to_text(value)))
            .collect(),
    )
}

/// Nulls render empty, strings render without quotes, everything else keeps
/// its JSON form.
fn scalar_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
