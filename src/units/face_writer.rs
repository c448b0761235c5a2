// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use serde_json::Value;

use crate::observability::messages::unit::{
    UnitEmissionCompleted, UnitEmissionStarted, UnitInitialized,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{ComputationUnit, OutputEvent, OutputPort, UnitInstance};
use crate::units::UnitError;

/// The manifest schema owned by the face writer unit.
///
/// The host hands the manifest over as an opaque JSON value; this is where
/// the shape becomes binding. An empty or absent `fonts` array is valid and
/// produces no events.
///
/// # Example
/// ```json
/// {
///   "fonts": [
///     { "family": "Inter", "weight": "400", "src": "fonts/inter-regular.woff2" }
///   ]
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct FontManifest {
    #[serde(default)]
    pub fonts: Vec<FontEntry>,
}

/// One font entry in the manifest.
///
/// # Fields
/// * `family` - Font family name, quoted into the declaration
/// * `style` - Font style (defaults to `normal`)
/// * `weight` - Font weight (defaults to `400`)
/// * `src` - URL or relative path of the font resource
/// * `display` - Optional `font-display` policy; omitted from the output when absent
#[derive(Debug, Deserialize)]
pub struct FontEntry {
    pub family: String,
    #[serde(default = "FontEntry::default_style")]
    pub style: String,
    #[serde(default = "FontEntry::default_weight")]
    pub weight: String,
    pub src: String,
    #[serde(default)]
    pub display: Option<String>,
}

impl FontEntry {
    fn default_style() -> String {
        "normal".to_string()
    }

    fn default_weight() -> String {
        "400".to_string()
    }
}

/// Face writer unit - renders one `@font-face` declaration per manifest entry.
///
/// This is the in-process unit behind the [`ComputationUnit`] boundary. It
/// deserializes the manifest into its own schema at initialize time and then
/// emits the rendered declarations on the output port from a spawned task,
/// in manifest order, closing the port when the last entry is out.
///
/// The unit renders what the manifest states and nothing more; it never opens
/// the font resources it references.
pub struct FaceWriterUnit;

impl FaceWriterUnit {
    pub fn new() -> Self {
        Self
    }

    fn render(entry: &FontEntry) -> String {
        let mut face = String::new();
        face.push_str("@font-face {\n");
        face.push_str(&format!("  font-family: \"{}\";\n", entry.family));
        face.push_str(&format!("  font-style: {};\n", entry.style));
        face.push_str(&format!("  font-weight: {};\n", entry.weight));
        if let Some(display) = &entry.display {
            face.push_str(&format!("  font-display: {};\n", display));
        }
        face.push_str(&format!("  src: url(\"{}\");\n", entry.src));
        face.push('}');
        face
    }

    fn emit(port: OutputPort, entries: Vec<FontEntry>) {
        let start_msg = UnitEmissionStarted {
            unit: "face_writer",
            entries: entries.len(),
        };

        let span = start_msg.span("unit_emission");
        let _guard = span.enter();
        start_msg.log();

        let mut emitted = 0usize;
        for entry in &entries {
            // A closed port means the subscriber is gone; stop emitting.
            if port.send(OutputEvent::text(Self::render(entry))).is_err() {
                break;
            }
            emitted += 1;
        }

        UnitEmissionCompleted {
            unit: "face_writer",
            events: emitted,
        }
        .log();
    }
}

impl Default for FaceWriterUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputationUnit for FaceWriterUnit {
    fn initialize(&self, config: Value) -> Result<UnitInstance, UnitError> {
        let manifest: FontManifest =
            serde_json::from_value(config).map_err(|source| UnitError::ManifestRejected {
                unit: self.name(),
                source,
            })?;

        UnitInitialized {
            unit: self.name(),
            entries: manifest.fonts.len(),
        }
        .log();

        let (instance, port) = UnitInstance::new();

        // Emission runs off the caller's path; the port buffers until the
        // subscriber attaches, so nothing is lost.
        tokio::spawn(async move {
            Self::emit(port, manifest.fonts);
        });

        Ok(instance)
    }

    fn name(&self) -> &'static str {
        "face_writer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn collect(instance: &mut UnitInstance) -> Vec<String> {
        let mut subscription = instance.subscribe().expect("first subscribe");
        let mut lines = Vec::new();
        while let Some(event) = subscription.recv().await {
            lines.push(event.to_string());
        }
        lines
    }

    #[tokio::test]
    async fn renders_one_declaration_per_entry_in_order() {
        let unit = FaceWriterUnit::new();
        let manifest = json!({
            "fonts": [
                { "family": "Inter", "weight": "400", "src": "fonts/inter-regular.woff2" },
                { "family": "Inter", "weight": "700", "src": "fonts/inter-bold.woff2" },
            ]
        });

        let mut instance = unit.initialize(manifest).unwrap();
        let faces = collect(&mut instance).await;

        assert_eq!(faces.len(), 2);
        assert!(faces[0].contains("font-weight: 400;"));
        assert!(faces[1].contains("font-weight: 700;"));
        assert!(faces.iter().all(|face| face.contains("font-family: \"Inter\";")));
    }

    #[tokio::test]
    async fn empty_manifest_emits_nothing() {
        let unit = FaceWriterUnit::new();

        let mut instance = unit.initialize(json!({"fonts": []})).unwrap();
        let faces = collect(&mut instance).await;

        assert!(faces.is_empty());
    }

    #[tokio::test]
    async fn missing_fonts_key_defaults_to_empty() {
        let unit = FaceWriterUnit::new();

        let mut instance = unit.initialize(json!({})).unwrap();
        let faces = collect(&mut instance).await;

        assert!(faces.is_empty());
    }

    #[tokio::test]
    async fn unrecognized_shape_is_rejected() {
        let unit = FaceWriterUnit::new();

        let result = unit.initialize(json!({"fonts": "not an array"}));

        match result {
            Err(UnitError::ManifestRejected { unit, .. }) => {
                assert_eq!(unit, "face_writer");
            }
            _ => panic!("Expected ManifestRejected error"),
        }
    }

    #[test]
    fn render_includes_display_only_when_present() {
        let entry = FontEntry {
            family: "Inter".to_string(),
            style: "italic".to_string(),
            weight: "400".to_string(),
            src: "fonts/inter-italic.woff2".to_string(),
            display: Some("swap".to_string()),
        };
        let face = FaceWriterUnit::render(&entry);
        assert!(face.contains("font-display: swap;"));
        assert!(face.contains("font-style: italic;"));

        let entry = FontEntry {
            display: None,
            ..entry
        };
        let face = FaceWriterUnit::render(&entry);
        assert!(!face.contains("font-display"));
    }

    #[test]
    fn entry_defaults_apply() {
        let manifest: FontManifest = serde_json::from_value(json!({
            "fonts": [{ "family": "Inter", "src": "fonts/inter.woff2" }]
        }))
        .unwrap();

        assert_eq!(manifest.fonts[0].style, "normal");
        assert_eq!(manifest.fonts[0].weight, "400");
    }
}
