use crate::state::preferences::DEFAULT_ROWS_PER_CHUNK;
use crate::state::query_store::Row;

/// Reveals a bound row set one chunk at a time. The full set is held from the
/// moment it is bound; `loaded` only tracks how much of it the table shows.
pub struct ResultsLoader {
    rows: Vec<Row>,
    loaded: usize,
    chunk_size: usize,
}

impl Default for ResultsLoader {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            loaded: 0,
            chunk_size: DEFAULT_ROWS_PER_CHUNK,
        }
    }
}

impl ResultsLoader {
    /// Binds a new row set and starts over with nothing loaded.
    pub fn bind(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.loaded = 0;
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.loaded = 0;
    }

    pub fn reset(&mut self) {
        self.loaded = 0;
    }

    pub fn set_chunk_size(&mut self, chunk_size: usize) {
        self.chunk_size = chunk_size.max(1);
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Loads the next chunk, capped at what remains. Returns false once every
    /// row is already loaded.
    pub fn load_next_chunk(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.loaded = (self.loaded + self.chunk_size).min(self.rows.len());
        true
    }

    pub fn loaded_rows(&self) -> &[Row] {
        &self.rows[..self.loaded]
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn total(&self) -> usize {
        self.rows.len()
    }

    pub fn is_complete(&self) -> bool {
        self.loaded >= self.rows.len()
    }

    /// First loaded row, the one the table header is derived from.
    pub fn header_row(&self) -> Option<&Row> {
        self.loaded_rows().first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(count: usize) -> Vec<Row> {
        (0..count)
            .map(|i| Row::new(vec![("id".into(), i.to_string())]))
            .collect()
    }

    #[test]
    fn loads_in_chunks_until_exhausted() {
        let mut loader = ResultsLoader::default();
        loader.bind(rows(45));

        assert!(loader.load_next_chunk());
        assert_eq!(loader.loaded(), 20);
        assert!(!loader.is_complete());

        assert!(loader.load_next_chunk());
        assert_eq!(loader.loaded(), 40);

        assert!(loader.load_next_chunk());
        assert_eq!(loader.loaded(), 45);
        assert!(loader.is_complete());

        assert!(!loader.load_next_chunk());
        assert_eq!(loader.loaded(), 45);
    }

    #[test]
    fn final_chunk_is_capped_at_remaining() {
        let mut loader = ResultsLoader::default();
        loader.bind(rows(25));
        loader.load_next_chunk();
        loader.load_next_chunk();
        assert_eq!(loader.loaded(), 25);
    }

    #[test]
    fn single_row_set_completes_in_one_chunk() {
        let mut loader = ResultsLoader::default();
        loader.bind(rows(1));
        assert!(loader.load_next_chunk());
        assert_eq!(loader.loaded(), 1);
        assert!(loader.is_complete());
    }

    #[test]
    fn empty_set_is_complete_immediately() {
        let mut loader = ResultsLoader::default();
        loader.bind(rows(0));
        assert!(loader.is_complete());
        assert!(!loader.load_next_chunk());
        assert_eq!(loader.loaded(), 0);
    }

    #[test]
    fn bind_resets_progress() {
        let mut loader = ResultsLoader::default();
        loader.bind(rows(45));
        loader.load_next_chunk();
        loader.load_next_chunk();

        loader.bind(rows(5));
        assert_eq!(loader.loaded(), 0);
        assert_eq!(loader.total(), 5);
    }

    #[test]
    fn reset_keeps_rows_but_clears_progress() {
        let mut loader = ResultsLoader::default();
        loader.bind(rows(30));
        loader.load_next_chunk();
        loader.reset();
        assert_eq!(loader.loaded(), 0);
        assert_eq!(loader.total(), 30);
    }

    #[test]
    fn chunk_size_has_a_floor_of_one() {
        let mut loader = ResultsLoader::default();
        loader.set_chunk_size(0);
        assert_eq!(loader.chunk_size(), 1);

        loader.bind(rows(3));
        loader.load_next_chunk();
        assert_eq!(loader.loaded(), 1);
    }

    #[test]
    fn custom_chunk_size_applies() {
        let mut loader = ResultsLoader::default();
        loader.set_chunk_size(7);
        loader.bind(rows(16));

        loader.load_next_chunk();
        assert_eq!(loader.loaded(), 7);
        loader.load_next_chunk();
        assert_eq!(loader.loaded(), 14);
        loader.load_next_chunk();
        assert_eq!(loader.loaded(), 16);
        assert!(loader.is_complete());
    }

    #[test]
    fn header_row_is_first_loaded() {
        let mut loader = ResultsLoader::default();
        loader.bind(rows(3));
        assert!(loader.header_row().is_none());

        loader.load_next_chunk();
        let header: Vec<&str> = loader.header_row().unwrap().columns().collect();
        assert_eq!(header, vec!["id"]);
    }
}
