mod fruit;

pub use fruit::{CreateFruitRequest, Fruit, DEFAULT_STATUS};
