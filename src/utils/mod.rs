mod fixtures;

pub use fixtures::load_fixture_queries;
