pub mod upload_image_route;
pub mod upload_response;
