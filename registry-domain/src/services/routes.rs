// Static route enumeration

use crate::entities::{Manifest, RouteParam};
use crate::value_objects::ItemName;

/// Every servable `/r/` slug: the bare name and the `.json` alias, in
/// manifest order.
pub fn enumerate_routes(manifest: &Manifest) -> Vec<RouteParam> {
    manifest
        .items()
        .iter()
        .filter(|item| !item.name.trim().is_empty())
        .flat_map(|item| {
            let name = ItemName(item.name.clone());
            let json = name.json_slug();
            [RouteParam { name: name.0 }, RouteParam { name: json }]
        })
        .collect()
}
