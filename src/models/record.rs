use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::flatten::{field_path, FlatField, Flatten, FlattenValue};

/// A metadata record describing one application
///
/// Serde field names double as the externally visible field paths, so they
/// stay lowercase. The record is immutable once stored; a replace swaps the
/// whole value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Record identifier; nil when the client leaves assignment to the server
    #[serde(default)]
    pub id: Uuid,
    pub title: String,
    pub version: String,
    pub maintainers: Vec<Maintainer>,
    pub company: String,
    pub website: Url,
    pub source: Url,
    pub license: String,
    pub description: String,
}

/// A maintainer listed on a record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintainer {
    pub name: String,
    pub email: String,
}

impl Flatten for Metadata {
    fn flatten_into(&self, prefix: &str, out: &mut Vec<FlatField>) {
        out.push(FlatField::new(
            field_path(prefix, "id"),
            self.id.flatten_value(),
        ));
        out.push(FlatField::new(
            field_path(prefix, "title"),
            self.title.flatten_value(),
        ));
        out.push(FlatField::new(
            field_path(prefix, "version"),
            self.version.flatten_value(),
        ));
        // The list itself is a path, not a value
        let maintainers_path = field_path(prefix, "maintainers");
        for maintainer in &self.maintainers {
            maintainer.flatten_into(&maintainers_path, out);
        }
        out.push(FlatField::new(
            field_path(prefix, "company"),
            self.company.flatten_value(),
        ));
        out.push(FlatField::new(
            field_path(prefix, "website"),
            self.website.flatten_value(),
        ));
        out.push(FlatField::new(
            field_path(prefix, "source"),
            self.source.flatten_value(),
        ));
        out.push(FlatField::new(
            field_path(prefix, "license"),
            self.license.flatten_value(),
        ));
        out.push(FlatField::new(
            field_path(prefix, "description"),
            self.description.flatten_value(),
        ));
    }
}

impl Flatten for Maintainer {
    fn flatten_into(&self, prefix: &str, out: &mut Vec<FlatField>) {
        out.push(FlatField::new(
            field_path(prefix, "name"),
            self.name.flatten_value(),
        ));
        out.push(FlatField::new(
            field_path(prefix, "email"),
            self.email.flatten_value(),
        ));
    }
}
