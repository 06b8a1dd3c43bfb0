use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::Fruit;
use crate::repository::FruitRepository;

/// Business logic for fruit operations: the single place creation rules are
/// enforced. Validation is a precondition to persistence — an invalid
/// record never reaches the repository.
pub struct FruitService {
    repo: Arc<dyn FruitRepository>,
}

impl FruitService {
    pub fn new(repo: Arc<dyn FruitRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_fruit(
        &self,
        name: String,
        quantity: i32,
        price: f64,
        owner: String,
    ) -> AppResult<Fruit> {
        let fruit = Fruit::new(Uuid::new_v4(), name, quantity, price, owner);
        fruit.validate()?;

        let saved = self.repo.save(&fruit).await?;
        info!(id = %saved.id, name = %saved.name, "Created fruit");
        Ok(saved)
    }

    pub async fn get_fruit_by_id(&self, id: &str) -> AppResult<Fruit> {
        self.repo.get_by_id(id).await
    }
}
