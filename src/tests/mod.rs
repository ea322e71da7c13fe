mod concurrency;
mod utils;
