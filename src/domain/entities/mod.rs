pub mod cached_project;
pub mod http;
pub mod image_file;
pub mod notification;
pub mod offline_data;
pub mod offline_photo;

pub use cached_project::CachedProject;
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestDestination};
pub use image_file::ImageFile;
pub use notification::{Notification, NotificationAction, PushData, PushPayload};
pub use offline_data::{OfflineData, OfflineDataDraft};
pub use offline_photo::{OfflinePhoto, OfflinePhotoDraft};
