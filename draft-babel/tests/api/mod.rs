mod export;
mod properties;
