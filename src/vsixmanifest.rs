use crate::manifest::Metadata;
use crate::xml::escape;

const VSX_NS: &str = "http://schemas.microsoft.com/developer/vsx-schema/2011";
const VSX_DESIGN_NS: &str = "http://schemas.microsoft.com/developer/vsx-schema-design/2011";

fn push_property(xml: &mut String, id: &str, value: &str) {
    xml.push_str(&format!(
        "      <Property Id=\"{}\" Value=\"{}\"/>\n",
        id,
        escape(value)
    ));
}

/// Project extension metadata into the `extension.vsixmanifest` document.
///
/// Element and attribute order is part of the schema contract with the
/// consuming host and must not be rearranged.
pub fn build(metadata: &Metadata) -> String {
    let id = metadata.name.as_deref().unwrap_or("");
    let version = metadata.version.as_deref().unwrap_or("");
    let publisher = metadata.publisher.as_deref().unwrap_or("");
    let display_name = metadata.display_name.as_deref().unwrap_or(id);
    let description = metadata.description.as_deref().unwrap_or("");

    let engine = metadata.engines.vscode.as_deref().unwrap_or("");
    let extension_kind = metadata
        .extension_kind
        .as_ref()
        .map(|kind| kind.as_value())
        .unwrap_or_else(|| "workspace".to_string());

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    xml.push_str(&format!(
        "<PackageManifest xmlns=\"{}\" xmlns:d=\"{}\" Version=\"2.0.0\">\n",
        VSX_NS, VSX_DESIGN_NS
    ));

    xml.push_str("  <Metadata>\n");
    xml.push_str(&format!(
        "    <Identity Language=\"en-US\" Id=\"{}\" Version=\"{}\" Publisher=\"{}\"/>\n",
        escape(id),
        escape(version),
        escape(publisher)
    ));
    xml.push_str(&format!(
        "    <DisplayName>{}</DisplayName>\n",
        escape(display_name)
    ));
    xml.push_str(&format!(
        "    <Description xml:space=\"preserve\">{}</Description>\n",
        escape(description)
    ));
    xml.push_str(&format!("    <Tags>{}</Tags>\n", escape(&metadata.keywords.join(","))));
    xml.push_str(&format!(
        "    <Categories>{}</Categories>\n",
        escape(&metadata.categories.join(","))
    ));
    xml.push_str("    <GalleryFlags>Public</GalleryFlags>\n");

    xml.push_str("    <Properties>\n");
    push_property(&mut xml, "Microsoft.VisualStudio.Code.Engine", engine);
    push_property(
        &mut xml,
        "Microsoft.VisualStudio.Code.ExtensionDependencies",
        &metadata.extension_dependencies.join(","),
    );
    push_property(
        &mut xml,
        "Microsoft.VisualStudio.Code.ExtensionPack",
        &metadata.extension_pack.join(","),
    );
    push_property(
        &mut xml,
        "Microsoft.VisualStudio.Code.ExtensionKind",
        &extension_kind,
    );
    push_property(
        &mut xml,
        "Microsoft.VisualStudio.Code.LocalizedLanguages",
        &metadata.localized_languages().join(","),
    );
    push_property(
        &mut xml,
        "Microsoft.VisualStudio.Services.GitHubFlavoredMarkdown",
        "true",
    );
    push_property(
        &mut xml,
        "Microsoft.VisualStudio.Services.Content.Pricing",
        "Free",
    );
    xml.push_str("    </Properties>\n");
    xml.push_str("  </Metadata>\n");

    xml.push_str("  <Installation>\n");
    xml.push_str("    <InstallationTarget Id=\"Microsoft.VisualStudio.Code\"/>\n");
    xml.push_str("  </Installation>\n");
    xml.push_str("  <Dependencies/>\n");

    xml.push_str("  <Assets>\n");
    xml.push_str(
        "    <Asset Type=\"Microsoft.VisualStudio.Code.Manifest\" Path=\"extension/package.json\" Addressable=\"true\"/>\n",
    );
    xml.push_str("  </Assets>\n");
    xml.push_str("</PackageManifest>\n");

    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(json: &str) -> Metadata {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_identity_and_defaults() {
        let xml = build(&metadata(
            r#"{"name": "foo", "version": "1.2.3", "publisher": "acme"}"#,
        ));
        assert!(xml.contains(
            r#"<Identity Language="en-US" Id="foo" Version="1.2.3" Publisher="acme"/>"#
        ));
        // displayName falls back to the id, description to empty
        assert!(xml.contains("<DisplayName>foo</DisplayName>"));
        assert!(xml.contains(r#"<Description xml:space="preserve"></Description>"#));
        assert!(xml.contains(
            r#"<Property Id="Microsoft.VisualStudio.Code.ExtensionKind" Value="workspace"/>"#
        ));
        assert!(xml.contains("<GalleryFlags>Public</GalleryFlags>"));
        assert!(xml.contains("<Dependencies/>"));
        assert!(xml.contains(r#"<InstallationTarget Id="Microsoft.VisualStudio.Code"/>"#));
        assert!(xml.contains(
            r#"<Asset Type="Microsoft.VisualStudio.Code.Manifest" Path="extension/package.json" Addressable="true"/>"#
        ));
    }

    #[test]
    fn test_extension_kind_list_joined() {
        let xml = build(&metadata(
            r#"{"name": "foo", "version": "1.0.0", "extensionKind": ["ui", "workspace"]}"#,
        ));
        assert!(xml.contains(
            r#"<Property Id="Microsoft.VisualStudio.Code.ExtensionKind" Value="ui,workspace"/>"#
        ));
    }

    #[test]
    fn test_joined_lists_and_engine() {
        let xml = build(&metadata(
            r#"{
                "name": "foo",
                "version": "1.0.0",
                "keywords": ["lint", "style"],
                "categories": ["Linters", "Other"],
                "engines": {"vscode": "^1.80.0"},
                "extensionDependencies": ["a.b", "c.d"],
                "extensionPack": ["e.f"],
                "contributes": {"localizations": [{"languageId": "de"}, {"languageId": "ja"}]}
            }"#,
        ));
        assert!(xml.contains("<Tags>lint,style</Tags>"));
        assert!(xml.contains("<Categories>Linters,Other</Categories>"));
        assert!(xml.contains(
            r#"<Property Id="Microsoft.VisualStudio.Code.Engine" Value="^1.80.0"/>"#
        ));
        assert!(xml.contains(
            r#"<Property Id="Microsoft.VisualStudio.Code.ExtensionDependencies" Value="a.b,c.d"/>"#
        ));
        assert!(xml.contains(
            r#"<Property Id="Microsoft.VisualStudio.Code.ExtensionPack" Value="e.f"/>"#
        ));
        assert!(xml.contains(
            r#"<Property Id="Microsoft.VisualStudio.Code.LocalizedLanguages" Value="de,ja"/>"#
        ));
        assert!(xml.contains(
            r#"<Property Id="Microsoft.VisualStudio.Services.GitHubFlavoredMarkdown" Value="true"/>"#
        ));
        assert!(xml.contains(
            r#"<Property Id="Microsoft.VisualStudio.Services.Content.Pricing" Value="Free"/>"#
        ));
    }

    #[test]
    fn test_metadata_text_is_escaped() {
        let xml = build(&metadata(
            r#"{"name": "foo", "version": "1.0.0", "description": "a <b> & \"c\""}"#,
        ));
        assert!(xml.contains(
            r#"<Description xml:space="preserve">a &lt;b&gt; &amp; &quot;c&quot;</Description>"#
        ));
    }

    #[test]
    fn test_properties_keep_fixed_order() {
        let xml = build(&metadata(r#"{"name": "foo", "version": "1.0.0"}"#));
        let order = [
            "Microsoft.VisualStudio.Code.Engine",
            "Microsoft.VisualStudio.Code.ExtensionDependencies",
            "Microsoft.VisualStudio.Code.ExtensionPack",
            "Microsoft.VisualStudio.Code.ExtensionKind",
            "Microsoft.VisualStudio.Code.LocalizedLanguages",
            "Microsoft.VisualStudio.Services.GitHubFlavoredMarkdown",
            "Microsoft.VisualStudio.Services.Content.Pricing",
        ];
        let positions: Vec<usize> = order.iter().map(|id| xml.find(id).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
