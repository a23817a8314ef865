mod http_source_fetcher;

pub use http_source_fetcher::HttpSourceFetcher;
