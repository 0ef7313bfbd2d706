//! JSON export of a sheet.

use fultimator_domain::Npc;

/// A downloadable file: name plus contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub contents: String,
}

/// Serialize a draft for download.
///
/// The file name is the sheet name with whitespace replaced by `_`,
/// lower-cased, with a `.json` suffix.
pub fn export_npc(npc: &Npc) -> Result<ExportArtifact, serde_json::Error> {
    let stem: String = npc
        .name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect::<String>()
        .to_lowercase();

    Ok(ExportArtifact {
        file_name: format!("{stem}.json"),
        contents: serde_json::to_string_pretty(npc)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fultimator_domain::UserId;

    #[test]
    fn file_name_replaces_whitespace_and_lowercases() {
        let npc = Npc::new(UserId::new(), "Goblin Chief");
        let artifact = export_npc(&npc).expect("export");
        assert_eq!(artifact.file_name, "goblin_chief.json");
    }

    #[test]
    fn contents_round_trip_to_the_same_draft() {
        let npc = Npc::new(UserId::new(), "Skeleton")
            .with_description("rattles")
            .with_tag("undead");
        let artifact = export_npc(&npc).expect("export");

        let back: Npc = serde_json::from_str(&artifact.contents).expect("round trip");
        assert_eq!(back, npc);
    }
}
