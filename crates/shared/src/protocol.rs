use serde_json::Value;

use crate::domain::Robot;

/// Collection endpoint serving the full robot list.
pub const ROBOTS_COLLECTION_PATH: &str = "/api/robots";

/// Prefix of every robot detail route handed to the router.
pub const ROBOT_DETAIL_PREFIX: &str = "robots/";

pub const HEALTHZ_PATH: &str = "/healthz";

/// Wire shape of the collection endpoint response.
pub type RobotList = Vec<Robot>;

/// Reinterprets a decoded JSON body as a robot list, keeping each element
/// verbatim. Returns `None` when the body is not an array.
pub fn robot_list_from_value(value: Value) -> Option<RobotList> {
    match value {
        Value::Array(items) => Some(items.into_iter().map(Robot).collect()),
        _ => None,
    }
}
