//! Replay of Redux-style action records.
//!
//! A scenario is a JSON array of records shaped like the actions the
//! storefront dispatches:
//!
//! ```json
//! [
//!   { "type": "constructor/addIngredient", "payload": { "_id": "...", "type": "bun", ... } },
//!   { "type": "order/orderBurger/rejected", "error": { "message": "Failed to create order" } }
//! ]
//! ```
//!
//! Types no slice recognises become [`AppAction::Unknown`].

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::constructor::ConstructorIntent;
use crate::domain::{
    ConstructorEntry, FeedResponse, Ingredient, Order, OrderResponse, PlacementId, User,
};
use crate::feed::FeedIntent;
use crate::ingredients::IngredientsIntent;
use crate::mvi::RequestEvent;
use crate::store::{AppAction, Store};
use crate::user::UserIntent;

/// Message used when a rejected record carries none.
const DEFAULT_REJECTION: &str = "Request rejected";

/// Errors that can occur when loading a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scenario: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid payload for '{action_type}': {source}")]
    PayloadError {
        action_type: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One dispatched action as recorded in a scenario file.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRecord {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub payload: Value,
    #[serde(default)]
    pub error: Option<RecordedError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordedError {
    #[serde(default)]
    pub message: Option<String>,
}

/// Ingredient payload, optionally pinned to a placement id.
#[derive(Deserialize)]
struct AddPayload {
    #[serde(default)]
    id: Option<String>,
    #[serde(flatten)]
    ingredient: Ingredient,
}

/// Auth endpoints wrap the profile: `{"user": {...}}`.
#[derive(Deserialize)]
struct UserPayload {
    user: User,
}

impl ActionRecord {
    fn payload<T: DeserializeOwned>(&self) -> Result<T, ScenarioError> {
        serde_json::from_value(self.payload.clone()).map_err(|e| ScenarioError::PayloadError {
            action_type: self.action_type.clone(),
            source: e,
        })
    }

    /// Rejection text: a string payload wins over `error.message`.
    fn rejection_message(&self) -> String {
        if let Value::String(message) = &self.payload {
            return message.clone();
        }
        self.error
            .as_ref()
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| DEFAULT_REJECTION.to_string())
    }

    fn lifecycle<T: DeserializeOwned>(&self, stage: &str) -> Result<RequestEvent<T>, ScenarioError> {
        Ok(match stage {
            "pending" => RequestEvent::Pending,
            "fulfilled" => RequestEvent::Fulfilled(self.payload()?),
            _ => RequestEvent::rejected(self.rejection_message()),
        })
    }

    /// Convert into the action the store understands.
    pub fn into_action(self) -> Result<AppAction, ScenarioError> {
        let action = match self.action_type.as_str() {
            "constructor/addIngredient" => {
                let AddPayload { id, ingredient } = self.payload()?;
                let entry = match id {
                    Some(id) => ConstructorEntry::new(ingredient, PlacementId::from(id)),
                    None => ConstructorEntry::place(ingredient),
                };
                ConstructorIntent::AddIngredient { entry }.into()
            }
            "constructor/removeIngredient" => {
                ConstructorIntent::remove(self.payload::<String>()?).into()
            }
            "constructor/moveIngredientUp" => ConstructorIntent::MoveIngredientUp {
                index: self.payload()?,
            }
            .into(),
            "constructor/moveIngredientDown" => ConstructorIntent::MoveIngredientDown {
                index: self.payload()?,
            }
            .into(),
            "constructor/closeOrderModal" => ConstructorIntent::CloseOrderResult.into(),
            "constructor/reset" => ConstructorIntent::Reset.into(),
            "user/resetError" => UserIntent::ResetError.into(),
            other => match other.rsplit_once('/') {
                Some((family, stage @ ("pending" | "fulfilled" | "rejected"))) => {
                    self.lifecycle_action(family, stage)?
                }
                _ => AppAction::unknown(other),
            },
        };
        Ok(action)
    }

    fn lifecycle_action(&self, family: &str, stage: &str) -> Result<AppAction, ScenarioError> {
        let user = |e: RequestEvent<UserPayload>| e.map(|p| p.user);
        let action = match family {
            "order/orderBurger" => {
                ConstructorIntent::SubmitOrder(self.lifecycle::<OrderResponse>(stage)?).into()
            }
            "ingredients/getIngredients" => IngredientsIntent::Load(
                self.lifecycle::<Option<Vec<Ingredient>>>(stage)?
                    .map(Option::unwrap_or_default),
            )
            .into(),
            "feed/getFeeds" => FeedIntent::Load(self.lifecycle::<FeedResponse>(stage)?).into(),
            "user/getUser" => UserIntent::GetUser(user(self.lifecycle(stage)?)).into(),
            "user/registerUser" => UserIntent::Register(user(self.lifecycle(stage)?)).into(),
            "user/loginUser" => UserIntent::Login(user(self.lifecycle(stage)?)).into(),
            "user/updateUser" => UserIntent::Update(user(self.lifecycle(stage)?)).into(),
            "user/getOrdersAll" => {
                UserIntent::GetOrdersAll(self.lifecycle::<Vec<Order>>(stage)?).into()
            }
            "user/logoutUser" => UserIntent::Logout(self.lifecycle::<()>(stage)?).into(),
            _ => AppAction::unknown(self.action_type.clone()),
        };
        Ok(action)
    }
}

/// Parse a scenario document into store actions.
pub fn parse_scenario(content: &str) -> Result<Vec<AppAction>, ScenarioError> {
    let records: Vec<ActionRecord> = serde_json::from_str(content)?;
    records.into_iter().map(ActionRecord::into_action).collect()
}

/// Read and parse a scenario file.
pub fn load_scenario(path: &Path) -> Result<Vec<AppAction>, ScenarioError> {
    let content = std::fs::read_to_string(path).map_err(|e| ScenarioError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_scenario(&content)
}

/// Dispatch every action in order.
pub fn replay(store: &Store, actions: impl IntoIterator<Item = AppAction>) -> usize {
    let mut count = 0;
    for action in actions {
        store.dispatch(action);
        count += 1;
    }
    tracing::info!(actions = count, "Scenario replayed");
    count
}
