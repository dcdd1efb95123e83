//! Project request and resource representations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::hateoas::{LinkBuilder, ResourceLinks};
use crate::domain::entities::{NewProject, Project, ProjectPatch};

/// Request body for `POST /projects` and `PUT /projects/{id}`.
///
/// # Nullable fields
///
/// `description` and `customer_id` distinguish absent from `null`:
///
/// - **Absent** → leave the stored value unchanged (on update)
/// - **`null`** → clear it
/// - **Value** → set it
///
/// Name uniqueness and customer existence need storage and are checked by
/// the project service.
#[derive(Debug, Deserialize, Validate)]
pub struct ProjectRequest {
    #[validate(
        required(message = "The name field is required."),
        length(min = 1, max = 255, message = "The name must be between 1 and 255 characters.")
    )]
    pub name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(min = 10, message = "The description must be at least 10 characters."))]
    pub description: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub customer_id: Option<Option<i64>>,
}

impl ProjectRequest {
    pub fn into_new_project(self) -> NewProject {
        NewProject {
            name: self.name.unwrap_or_default(),
            description: self.description.flatten(),
            customer_id: self.customer_id.flatten(),
        }
    }

    pub fn into_patch(self) -> ProjectPatch {
        ProjectPatch {
            name: self.name,
            description: self.description,
            customer_id: self.customer_id,
        }
    }
}

/// Public JSON representation of a project.
#[derive(Debug, Serialize)]
pub struct ProjectResource {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub customer_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "_links")]
    pub links: ResourceLinks,
}

impl ProjectResource {
    pub fn new(project: Project, links: &LinkBuilder) -> Self {
        Self {
            links: links.project_links(project.id, project.customer_id),
            id: project.id,
            name: project.name,
            description: project.description,
            customer_id: project.customer_id,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::messages;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> ProjectRequest {
        serde_json::from_value(body).unwrap()
    }

    fn field_errors(req: &ProjectRequest) -> Vec<String> {
        match req.validate() {
            Ok(()) => Vec::new(),
            Err(e) => {
                let mut fields: Vec<String> =
                    e.field_errors().keys().map(|k| k.to_string()).collect();
                fields.sort();
                fields
            }
        }
    }

    fn messages_for(req: &ProjectRequest, field: &str) -> Vec<String> {
        let Err(err) = req.validate() else {
            return Vec::new();
        };
        err.field_errors()
            .get(field)
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_valid_request() {
        let req = parse(json!({
            "name": "Apollo",
            "description": "Lunar landing programme",
            "customer_id": 3
        }));
        assert!(field_errors(&req).is_empty());
    }

    #[test]
    fn test_name_is_required() {
        let req = parse(json!({ "description": "Lunar landing programme" }));
        assert_eq!(field_errors(&req), ["name"]);
        assert_eq!(messages_for(&req, "name"), [messages::NAME_REQUIRED]);
    }

    #[test]
    fn test_name_length_bounds() {
        assert_eq!(field_errors(&parse(json!({ "name": "" }))), ["name"]);
        let too_long = parse(json!({ "name": "x".repeat(256) }));
        assert_eq!(field_errors(&too_long), ["name"]);
        assert_eq!(messages_for(&too_long, "name"), [messages::NAME_LENGTH]);
        assert!(field_errors(&parse(json!({ "name": "x".repeat(255) }))).is_empty());
    }

    #[test]
    fn test_short_description_is_rejected() {
        let req = parse(json!({ "name": "Apollo", "description": "short" }));
        assert_eq!(field_errors(&req), ["description"]);
        assert_eq!(
            messages_for(&req, "description"),
            [messages::DESCRIPTION_MIN]
        );
    }

    #[test]
    fn test_null_description_is_allowed() {
        let req = parse(json!({ "name": "Apollo", "description": null }));
        assert!(field_errors(&req).is_empty());
        assert_eq!(req.description, Some(None));
    }

    #[test]
    fn test_absent_and_null_are_distinct_in_patch() {
        let patch = parse(json!({ "name": "Apollo" })).into_patch();
        assert_eq!(patch.description, None);
        assert_eq!(patch.customer_id, None);

        let patch = parse(json!({ "name": "Apollo", "customer_id": null })).into_patch();
        assert_eq!(patch.customer_id, Some(None));
    }

    #[test]
    fn test_into_new_project_flattens_nulls() {
        let new = parse(json!({ "name": "Apollo", "description": null })).into_new_project();
        assert_eq!(new.name, "Apollo");
        assert_eq!(new.description, None);
        assert_eq!(new.customer_id, None);
    }

    #[test]
    fn test_resource_serialization() {
        let now = Utc::now();
        let project = Project::new(
            7,
            "Apollo".to_string(),
            None,
            Some(3),
            now,
            now,
            None,
        );
        let links = LinkBuilder::parse("http://localhost:3000").unwrap();
        let value = serde_json::to_value(ProjectResource::new(project, &links)).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["customer_id"], 3);
        assert!(value["description"].is_null());
        assert!(value.get("deleted_at").is_none());
        assert_eq!(
            value["_links"]["customer"]["href"],
            "http://localhost:3000/customers/3"
        );
    }
}
