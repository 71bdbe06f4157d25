pub mod entities;

pub use entities::{
    CachedProject, HttpRequest, HttpResponse, ImageFile, Notification, OfflineData, OfflinePhoto,
};
