//! The resources this server exposes.
//!
//! A new resource is a `ResourceDefinition` in `definitions/` plus one line
//! in each function below.

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{GenresResource, ResourceDefinition};
use super::service::ResourceEntry;

fn entry<R: ResourceDefinition>() -> ResourceEntry {
    let raw = RawResource {
        description: Some(R::DESCRIPTION.into()),
        mime_type: Some(R::MIME_TYPE.into()),
        ..RawResource::new(R::URI, R::NAME)
    };
    ResourceEntry {
        resource: raw.no_annotation(),
        view: R::view(),
    }
}

pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![entry::<GenresResource>()]
}

pub fn resource_uris() -> Vec<&'static str> {
    vec![GenresResource::URI]
}
