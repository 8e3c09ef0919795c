use serde::Serialize;

/// The single catalog this addon serves, as `(type, id)`.
pub const CATALOG_TYPE: &str = "series";
pub const CATALOG_ID: &str = "nyaa-multisubs";

const CATALOG_NAME: &str = "Nyaa Multi Subs";

/// Addon manifest, as served at `/manifest.json`.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub id: &'static str,
    pub version: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub resources: Vec<&'static str>,
    pub types: Vec<&'static str>,
    pub catalogs: Vec<CatalogDescriptor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogDescriptor {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: &'static str,
    pub name: &'static str,
}

/// Build the manifest.
pub fn manifest() -> Manifest {
    Manifest {
        id: "com.yourname.nyaa-multisubs",
        version: env!("CARGO_PKG_VERSION"),
        name: CATALOG_NAME,
        description: "Anime torrents with multiple subtitles from Nyaa.si",
        resources: vec!["catalog", "stream"],
        types: vec![CATALOG_TYPE],
        catalogs: vec![CatalogDescriptor {
            kind: CATALOG_TYPE,
            id: CATALOG_ID,
            name: CATALOG_NAME,
        }],
    }
}
