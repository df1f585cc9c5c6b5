//! Shape phase - prepares the v1 descriptors before conversion.

use crdgo_apiext::shape::{add_attribution, truncate_descriptions};
use eyre::Result;
use tracing::debug;

use crate::pipeline::{GenerationContext, Phase};

/// Phase that truncates schema descriptions and stamps attribution.
pub struct ShapePhase;

impl Phase for ShapePhase {
    fn name(&self) -> &'static str {
        "shape"
    }

    fn description(&self) -> &'static str {
        "Truncate descriptions and add attribution"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let config = &ctx.config;
        for (group_kind, crd) in ctx.descriptors.iter_mut() {
            if let Some(max_len) = config.max_desc_len {
                truncate_descriptions(crd, max_len);
            }
            add_attribution(crd, &config.tool_version);
            debug!(%group_kind, "shaped descriptor");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crdgo_apiext::{
        GroupKind,
        schema::{CustomResourceValidation, JsonSchemaProps},
        shape::ATTRIBUTION_ANNOTATION,
        v1,
    };

    use super::*;
    use crate::{config::GeneratorConfig, pipeline::Descriptors};

    fn descriptors(description: &str) -> Descriptors {
        let mut crd = v1::CustomResourceDefinition::default();
        crd.spec.versions.push(v1::CustomResourceDefinitionVersion {
            name: "v1".into(),
            storage: true,
            schema: Some(CustomResourceValidation {
                open_api_v3_schema: Some(JsonSchemaProps {
                    description: description.into(),
                    ..Default::default()
                }),
            }),
            ..Default::default()
        });
        Descriptors::from([(GroupKind::new("a.io", "Alpha"), crd)])
    }

    fn root_description(ctx: &GenerationContext) -> &str {
        ctx.descriptors
            .values()
            .next()
            .and_then(|crd| crd.spec.versions[0].schema.as_ref())
            .and_then(|s| s.open_api_v3_schema.as_ref())
            .map(|p| p.description.as_str())
            .unwrap()
    }

    #[test]
    fn test_attribution_uses_tool_version() {
        let config = GeneratorConfig {
            tool_version: "v1.2.3".into(),
            ..GeneratorConfig::new("crds")
        };
        let mut ctx = GenerationContext::new(config, descriptors("text"));
        ShapePhase.run(&mut ctx).unwrap();

        let crd = ctx.descriptors.values().next().unwrap();
        assert_eq!(
            crd.metadata.annotations.get(ATTRIBUTION_ANNOTATION).map(String::as_str),
            Some("v1.2.3")
        );
        assert_eq!(root_description(&ctx), "text");
    }

    #[test]
    fn test_descriptions_are_truncated() {
        let config = GeneratorConfig {
            max_desc_len: Some(12),
            ..GeneratorConfig::new("crds")
        };
        let mut ctx = GenerationContext::new(config, descriptors("the quick brown fox"));
        ShapePhase.run(&mut ctx).unwrap();

        assert_eq!(root_description(&ctx), "the quick...");
    }

    #[test]
    fn test_zero_drops_descriptions() {
        let config = GeneratorConfig {
            max_desc_len: Some(0),
            ..GeneratorConfig::new("crds")
        };
        let mut ctx = GenerationContext::new(config, descriptors("gone"));
        ShapePhase.run(&mut ctx).unwrap();

        assert_eq!(root_description(&ctx), "");
    }
}
