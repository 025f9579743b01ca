//! Backend routes the frontend calls through `apiServerUrl`

use serde::Serialize;
use std::fmt;

/// Routes exposed by the Coffee Shop API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiRoute {
    /// Health greeting
    Index,
    /// Public drink list, short representation
    Drinks,
    /// Drink list with recipes
    DrinksDetail,
    CreateDrink,
    UpdateDrink(u64),
    DeleteDrink(u64),
}

impl ApiRoute {
    /// One instance of every route, with `id` standing in for path parameters
    pub fn all(id: u64) -> [ApiRoute; 6] {
        [
            ApiRoute::Index,
            ApiRoute::Drinks,
            ApiRoute::DrinksDetail,
            ApiRoute::CreateDrink,
            ApiRoute::UpdateDrink(id),
            ApiRoute::DeleteDrink(id),
        ]
    }

    pub fn method(&self) -> &'static str {
        match self {
            ApiRoute::Index | ApiRoute::Drinks | ApiRoute::DrinksDetail => "GET",
            ApiRoute::CreateDrink => "POST",
            ApiRoute::UpdateDrink(_) => "PATCH",
            ApiRoute::DeleteDrink(_) => "DELETE",
        }
    }

    pub fn path(&self) -> String {
        match self {
            ApiRoute::Index => "/".to_string(),
            ApiRoute::Drinks | ApiRoute::CreateDrink => "/drinks".to_string(),
            ApiRoute::DrinksDetail => "/drinks-details".to_string(),
            ApiRoute::UpdateDrink(id) | ApiRoute::DeleteDrink(id) => format!("/drinks/{id}"),
        }
    }

    /// Permission the access token must carry, `None` for public routes
    pub fn permission(&self) -> Option<&'static str> {
        match self {
            ApiRoute::Index | ApiRoute::Drinks => None,
            ApiRoute::DrinksDetail => Some("get:drinks-details"),
            ApiRoute::CreateDrink => Some("post:drinks"),
            ApiRoute::UpdateDrink(_) => Some("patch:drinks"),
            ApiRoute::DeleteDrink(_) => Some("delete:drinks"),
        }
    }
}

impl fmt::Display for ApiRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
