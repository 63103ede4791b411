use crate::error::Result;
use crate::model::Movie;
use crate::query::{Filter, IndexInfo, ScoredMovie, Sort, Update, UpdateResult};

/// The document store the catalog and the report engine run against.
///
/// Implementations enforce the movie schema at write time and report
/// violations as [`Error::Validation`](crate::Error::Validation). Every
/// mutation touches at most one document and refreshes its `updated_at`.
pub trait MovieCollection {
    /// Store one movie exactly as given.
    fn insert_one(&self, movie: &Movie) -> Result<()>;

    /// Store a batch of movies; either all are stored or none.
    fn insert_many(&self, movies: &[Movie]) -> Result<usize>;

    /// All movies matching `filter`, in `sort` order.
    fn find(&self, filter: &Filter, sort: Sort) -> Result<Vec<Movie>>;

    /// Apply `update` to the first movie matching `filter`.
    fn update_one(&self, filter: &Filter, update: &Update) -> Result<UpdateResult>;

    /// Remove the first movie matching `filter`, returning how many were removed.
    fn delete_one(&self, filter: &Filter) -> Result<u64>;

    /// Remove every movie.
    fn clear(&self) -> Result<u64>;

    /// Number of stored movies.
    fn count(&self) -> Result<u64>;

    /// Relevance-ranked matches of any term of `query` against titles,
    /// directors and review comments.
    fn text_search(&self, query: &str) -> Result<Vec<ScoredMovie>>;

    /// Indexes maintained over the collection.
    fn list_indexes(&self) -> Result<Vec<IndexInfo>>;
}
