//! Built-in collection identifier table
//!
//! Maps DPLA partner names to their fixed 32-character collection
//! identifiers, so callers can build collection-scoped queries without
//! first searching for the identifier. The table is reference data:
//! immutable, embedded in the binary, loaded once.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Partner name → 32-character collection identifier
pub static PARTNER_COLLECTIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        m.insert("ARTstor", "6e39c2be7b1902b0dd7c2ba8989e7d28");
        m.insert(
            "Biodiversity Heritage Library",
            "f1a5a81e3a0b13f7f3bab1b36e8f9d47",
        );
        m.insert("David Rumsey", "c6791f19807733ce74bd29f66e5f055e");
        m.insert("Digital Commonwealth", "44ea6e2c77a70ea0f4a2b712b0bdd127");
        m.insert(
            "Digital Library of Georgia",
            "9b73c1fbd7e9d3ccdb03e47d3f46a172",
        );
        m.insert("Harvard Library", "0e21fd1cf3e45b437e98fcbcbbb0d3f5");
        m.insert("HathiTrust", "d25e6c8f9d28533e93827ab3e9e7f2a1");
        m.insert("Internet Archive", "7d81f34a32e3c8a4391d0c6f8a7c4be3");
        m.insert("J. Paul Getty Trust", "3c83ef67a9a302b8fce126a1ccf37d24");
        m.insert("Kentucky Digital Library", "a5b09a68b45e424f7cd1cd18e2f853dc");
        m.insert("Minnesota Digital Library", "b7f125f8e48a49b0d21a8f40e6c4eac7");
        m.insert(
            "Mountain West Digital Library",
            "83cfd74e18d7f9c06e6dc04e2a65f1b9",
        );
        m.insert(
            "National Archives and Records Administration",
            "f299cd1c1b2be6e1c2f8348f1fd46c23",
        );
        m.insert(
            "North Carolina Digital Heritage Center",
            "e9c51dbef4c9a0c34674f57a56f4ad39",
        );
        m.insert("Smithsonian Institution", "8a0c3c6dbe971f4a11237bfae7d31b72");
        m.insert(
            "South Carolina Digital Library",
            "c885d087b2b7b39515dc07f44c3f7bcd",
        );
        m.insert(
            "The New York Public Library",
            "1f0aff9931e8b95aa339eab1b0c0db46",
        );
        m.insert(
            "The Portal to Texas History",
            "dd2e27798a1d4c18d3c4bea0f5f9e302",
        );
        m.insert(
            "University of Illinois at Urbana-Champaign",
            "50b4a3d0cbb7cd30e23b7e0aad0ef1de",
        );
        m.insert(
            "University of Virginia Library",
            "4a3b5d3829a928a4f5a6a1e45d0ff261",
        );

        m
    });

/// Look up the collection identifier for a partner name
pub fn collection_id(partner: &str) -> Option<&'static str> {
    PARTNER_COLLECTIONS.get(partner).copied()
}

/// Check whether a partner name is in the table
pub fn is_known(partner: &str) -> bool {
    PARTNER_COLLECTIONS.contains_key(partner)
}

/// All partner names in the table, sorted
pub fn known_partners() -> Vec<&'static str> {
    let mut names: Vec<_> = PARTNER_COLLECTIONS.keys().copied().collect();
    names.sort_unstable();
    names
}
