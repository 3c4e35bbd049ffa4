use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Bus entity as stored in the `Bus` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Bus {
    /// Unique identifier (stored as _id), assigned on creation
    #[serde(rename = "_id", alias = "id", with = "id_as_string")]
    #[schema(value_type = String, format = Uuid)]
    pub id: Uuid,
    /// Registration plate
    pub plate: String,
    /// Service number
    pub number: String,
    /// Service type, e.g. "express" or "ordinary"
    #[serde(rename = "type", default)]
    pub bus_type: String,
    /// Ordered stop indices
    #[serde(default)]
    pub route: Vec<i64>,
}

/// Request body for creating a bus. `plate` and `number` are required.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateBus {
    #[serde(default)]
    #[validate(length(min = 1, message = "plate is required"))]
    pub plate: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "number is required"))]
    pub number: String,
    #[serde(rename = "type", default)]
    pub bus_type: Option<String>,
    #[serde(default)]
    pub route: Option<Vec<i64>>,
}

/// Request body for editing a bus. Absent or empty fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBus {
    pub plate: Option<String>,
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub bus_type: Option<String>,
    pub route: Option<Vec<i64>>,
}

/// Query parameters accepted by the search endpoint
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BusQuery {
    /// Exact plate to match
    pub plate: Option<String>,
    /// Exact service number to match
    pub number: Option<String>,
    /// Exact service type to match
    #[serde(rename = "type")]
    pub bus_type: Option<String>,
}

impl BusQuery {
    /// Build from raw query pairs. Unknown keys are ignored and a repeated
    /// key keeps its first value.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "plate" => &mut query.plate,
                "number" => &mut query.number,
                "type" => &mut query.bus_type,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

impl Bus {
    /// Create a new bus with a freshly generated id
    pub fn new(input: CreateBus) -> Self {
        Self {
            id: Uuid::now_v7(),
            plate: input.plate,
            number: input.number,
            bus_type: input.bus_type.unwrap_or_default(),
            route: input.route.unwrap_or_default(),
        }
    }
}

/// Ids are stored as their hyphenated string form so that documents and
/// `_id` filters always agree, whatever the serializer.
mod id_as_string {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use uuid::Uuid;

    pub fn serialize<S: Serializer>(id: &Uuid, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Uuid::parse_str(&raw).map_err(D::Error::custom)
    }
}
