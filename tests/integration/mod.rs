mod concurrency;
mod export;
mod listings;
