use thiserror::Error;

use nav_geometry::Point2;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("strategy configuration error: {0}")]
    Config(String),

    #[error("destination {0} lies outside every room")]
    UnreachableDestination(Point2),
}

pub type StrategyResult<T> = Result<T, StrategyError>;
