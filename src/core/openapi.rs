use utoipa::{Modify, OpenApi};

use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers, models};

#[derive(OpenApi)]
#[openapi(
    paths(
        locations_handlers::get_location,
        locations_handlers::create_location,
        locations_handlers::update_location,
        locations_handlers::delete_location,
    ),
    components(schemas(
        locations_dtos::CreateLocationDto,
        locations_dtos::UpdateLocationDto,
        locations_dtos::LocationResponseDto,
        models::Coordinate,
    )),
    tags(
        (name = "locations", description = "Geocoded location records")
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_location_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/locations/{id}"));
        assert!(doc.paths.paths.contains_key("/locations/"));
    }

    #[test]
    fn test_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "T".to_string(),
            version: "9".to_string(),
            description: "D".to_string(),
        }
        .modify(&mut doc);
        assert_eq!(doc.info.title, "T");
        assert_eq!(doc.info.description.as_deref(), Some("D"));
    }
}
