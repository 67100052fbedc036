/// One result row as an ordered list of column/value pairs. Column order is
/// the order the row was produced with, not an alphabetical or hashed one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[(String, String)] {
        &self.cells
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(column, _)| column.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct SavedQuery {
    pub id: u64,
    pub title: String,
    pub text: String,
    pub rows: Vec<Row>,
}

/// Saved queries in insertion order plus the id of the active one. Ids come
/// from a counter that only ever moves forward, so deleting a query never
/// frees its id for reuse.
pub struct QueryStore {
    queries: Vec<SavedQuery>,
    active: Option<u64>,
    next_id: u64,
}

impl Default for QueryStore {
    fn default() -> Self {
        Self {
            queries: Vec::new(),
            active: None,
            next_id: 1,
        }
    }
}

impl QueryStore {
    /// Builds a store from pre-existing queries, selecting the first one and
    /// seeding the id counter past the largest id present.
    pub fn seed(queries: Vec<SavedQuery>) -> Self {
        let next_id = queries.iter().map(|q| q.id).max().map_or(1, |id| id + 1);
        let active = queries.first().map(|q| q.id);
        Self {
            queries,
            active,
            next_id,
        }
    }

    fn take_next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Clears the selection without touching the stored queries. A fresh
    /// query is nothing but a blank editor; it only becomes a record on save.
    pub fn deselect(&mut self) {
        self.active = None;
    }

    /// Appends a new query holding `current_text`. Existing queries are never
    /// overwritten; saving twice yields two entries.
    pub fn save(&mut self, current_text: &str) {
        let id = self.take_next_id();
        self.queries.push(SavedQuery {
            id,
            title: format!("Query {id}"),
            text: current_text.to_owned(),
            rows: Vec::new(),
        });
        self.active = Some(id);
    }

    pub fn select(&mut self, id: u64) {
        if self.contains(id) {
            self.active = Some(id);
        }
    }

    /// Stores the trimmed title, or `fallback` when nothing is left after
    /// trimming.
    pub fn rename(&mut self, id: u64, proposed: &str, fallback: &str) {
        if let Some(query) = self.get_mut(id) {
            let trimmed = proposed.trim();
            query.title = if trimmed.is_empty() {
                fallback.to_owned()
            } else {
                trimmed.to_owned()
            };
        }
    }

    pub fn delete(&mut self, id: u64) {
        self.queries.retain(|q| q.id != id);
        if self.active == Some(id) {
            self.active = None;
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.queries.iter().any(|q| q.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&SavedQuery> {
        self.queries.iter().find(|q| q.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut SavedQuery> {
        self.queries.iter_mut().find(|q| q.id == id)
    }

    pub fn active_id(&self) -> Option<u64> {
        self.active
    }

    pub fn active(&self) -> Option<&SavedQuery> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SavedQuery> {
        self.queries.iter()
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(id: u64) -> SavedQuery {
        SavedQuery {
            id,
            title: format!("Query {id}"),
            text: String::new(),
            rows: Vec::new(),
        }
    }

    #[test]
    fn seed_selects_first_and_advances_counter() {
        let mut store = QueryStore::seed(vec![query(1), query(5), query(3)]);
        assert_eq!(store.active_id(), Some(1));

        store.save("");
        assert_eq!(store.active_id(), Some(6));
    }

    #[test]
    fn save_assigns_unique_increasing_ids() {
        let mut store = QueryStore::default();
        store.save("SELECT a;");
        store.save("SELECT b;");
        store.save("SELECT c;");

        let ids: Vec<u64> = store.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.get(2).map(|q| q.title.as_str()), Some("Query 2"));
        assert_eq!(store.active_id(), Some(3));
    }

    #[test]
    fn ids_stay_unique_after_delete() {
        let mut store = QueryStore::default();
        store.save("");
        store.save("");
        store.delete(2);
        store.save("");

        let ids: Vec<u64> = store.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn deselect_clears_selection_and_keeps_queries() {
        let mut store = QueryStore::seed(vec![query(1), query(2)]);
        store.deselect();
        assert_eq!(store.active_id(), None);
        assert_eq!(store.len(), 2);

        store.select(2);
        assert_eq!(store.active_id(), Some(2));
    }

    #[test]
    fn save_appends_with_text_and_selects() {
        let mut store = QueryStore::seed(vec![query(1)]);
        store.save("SELECT 1;");

        assert_eq!(store.len(), 2);
        assert_eq!(store.active_id(), Some(2));
        let saved = store.active().unwrap();
        assert_eq!(saved.text, "SELECT 1;");
        assert_eq!(saved.title, "Query 2");
        assert!(saved.rows.is_empty());

        store.save("SELECT 1;");
        assert_eq!(store.len(), 3);
        assert_eq!(store.active_id(), Some(3));
    }

    #[test]
    fn select_unknown_id_is_a_noop() {
        let mut store = QueryStore::seed(vec![query(1), query(2)]);
        store.select(2);
        store.select(99);
        assert_eq!(store.active_id(), Some(2));
    }

    #[test]
    fn delete_active_clears_selection() {
        let mut store = QueryStore::seed(vec![query(1), query(2)]);
        store.delete(1);
        assert_eq!(store.active_id(), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_inactive_keeps_selection() {
        let mut store = QueryStore::seed(vec![query(1), query(2)]);
        store.delete(2);
        assert_eq!(store.active_id(), Some(1));
        assert!(store.active().is_some());
    }

    #[test]
    fn delete_unknown_id_is_a_noop() {
        let mut store = QueryStore::seed(vec![query(1)]);
        store.delete(42);
        assert_eq!(store.len(), 1);
        assert_eq!(store.active_id(), Some(1));
    }

    #[test]
    fn rename_trims_whitespace() {
        let mut store = QueryStore::seed(vec![query(1)]);
        store.rename(1, "  Monthly Revenue  ", "Untitled Query");
        assert_eq!(store.get(1).unwrap().title, "Monthly Revenue");
    }

    #[test]
    fn rename_blank_falls_back() {
        let mut store = QueryStore::seed(vec![query(1)]);
        store.rename(1, "   ", "Untitled Query");
        assert_eq!(store.get(1).unwrap().title, "Untitled Query");
    }

    #[test]
    fn rename_unknown_id_is_a_noop() {
        let mut store = QueryStore::seed(vec![query(1)]);
        store.rename(7, "Other", "Untitled Query");
        assert_eq!(store.get(1).unwrap().title, "Query 1");
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut store = QueryStore::default();
        store.save("SELECT a;");
        store.save("SELECT b;");
        store.save("SELECT c;");

        let titles: Vec<&str> = store.iter().map(|q| q.title.as_str()).collect();
        assert_eq!(titles, vec!["Query 1", "Query 2", "Query 3"]);
    }

    #[test]
    fn row_keeps_column_order() {
        let row = Row::new(vec![
            ("zeta".into(), "1".into()),
            ("alpha".into(), "2".into()),
        ]);
        let columns: Vec<&str> = row.columns().collect();
        assert_eq!(columns, vec!["zeta", "alpha"]);
        assert_eq!(row.len(), 2);
    }
}
