//! In-memory food backend for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::FoodId;
use crate::error::BackendError;
use crate::port::outbound::{FavoriteRecord, FoodBackend, FoodRecord, OrderPayload};

/// One backend call, in the order it was received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchFood(FoodId),
    FetchFavorites,
    AddFavorite(FavoriteRecord),
    RemoveFavorite(FoodId),
    CreateOrder(OrderPayload),
}

/// Scripted [`FoodBackend`] that keeps foods, favorites and orders in memory
/// and records every call, failed ones included.
///
/// Writes to the favorites store and the orders list only take effect when
/// the call succeeds.
#[derive(Default)]
pub struct RecordingBackend {
    foods: Mutex<HashMap<FoodId, FoodRecord>>,
    favorites: Mutex<Vec<FavoriteRecord>>,
    orders: Mutex<Vec<OrderPayload>>,
    calls: Mutex<Vec<Call>>,
    write_delay: Mutex<Option<Duration>>,
    fail_food_read: AtomicBool,
    fail_favorites_read: AtomicBool,
    fail_favorite_writes: AtomicBool,
    fail_orders: AtomicBool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend serving a single food.
    pub fn with_food(food: FoodRecord) -> Self {
        let backend = Self::new();
        backend.add_food(food);
        backend
    }

    pub fn add_food(&self, food: FoodRecord) {
        self.foods.lock().insert(food.id, food);
    }

    pub fn set_favorites(&self, favorites: Vec<FavoriteRecord>) {
        *self.favorites.lock() = favorites;
    }

    pub fn fail_food_read(&self, fail: bool) {
        self.fail_food_read.store(fail, Ordering::SeqCst);
    }

    pub fn fail_favorites_read(&self, fail: bool) {
        self.fail_favorites_read.store(fail, Ordering::SeqCst);
    }

    pub fn fail_favorite_writes(&self, fail: bool) {
        self.fail_favorite_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_orders(&self, fail: bool) {
        self.fail_orders.store(fail, Ordering::SeqCst);
    }

    /// Delay every write by `delay` before it is applied.
    pub fn set_write_delay(&self, delay: Duration) {
        *self.write_delay.lock() = Some(delay);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Only the favorite writes, in arrival order.
    pub fn favorite_writes(&self) -> Vec<Call> {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, Call::AddFavorite(_) | Call::RemoveFavorite(_)))
            .cloned()
            .collect()
    }

    pub fn favorite_ids(&self) -> Vec<FoodId> {
        self.favorites.lock().iter().map(|f| f.id).collect()
    }

    pub fn orders(&self) -> Vec<OrderPayload> {
        self.orders.lock().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    async fn delay_write(&self) {
        let delay = *self.write_delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn unavailable(path: String, flag: &AtomicBool) -> Result<(), BackendError> {
        if flag.load(Ordering::SeqCst) {
            Err(BackendError::Status { path, status: 503 })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl FoodBackend for RecordingBackend {
    async fn fetch_food(&self, id: FoodId) -> Result<Option<FoodRecord>, BackendError> {
        self.record(Call::FetchFood(id));
        Self::unavailable(format!("foods/{id}"), &self.fail_food_read)?;
        Ok(self.foods.lock().get(&id).cloned())
    }

    async fn fetch_favorites(&self) -> Result<Vec<FavoriteRecord>, BackendError> {
        self.record(Call::FetchFavorites);
        Self::unavailable("favorites".into(), &self.fail_favorites_read)?;
        Ok(self.favorites.lock().clone())
    }

    async fn add_favorite(&self, favorite: &FavoriteRecord) -> Result<(), BackendError> {
        self.record(Call::AddFavorite(favorite.clone()));
        self.delay_write().await;
        Self::unavailable("favorites".into(), &self.fail_favorite_writes)?;
        self.favorites.lock().push(favorite.clone());
        Ok(())
    }

    async fn remove_favorite(&self, id: FoodId) -> Result<(), BackendError> {
        self.record(Call::RemoveFavorite(id));
        self.delay_write().await;
        Self::unavailable(format!("favorites/{id}"), &self.fail_favorite_writes)?;
        self.favorites.lock().retain(|f| f.id != id);
        Ok(())
    }

    async fn create_order(&self, order: &OrderPayload) -> Result<(), BackendError> {
        self.record(Call::CreateOrder(order.clone()));
        self.delay_write().await;
        Self::unavailable("orders".into(), &self.fail_orders)?;
        self.orders.lock().push(order.clone());
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "recording"
    }
}
