//! Convert phase - produces each requested version of every descriptor.

use crdgo_apiext::{as_version, shape::to_trivial_versions};
use eyre::{Result, WrapErr, bail};
use tracing::debug;

use crate::pipeline::{GenerationContext, Phase};

/// Phase that converts descriptors into every requested API version.
///
/// Besides the conversion itself this applies the trivial-version collapse
/// to v1beta1 output and the `preserveUnknownFields` default: with v1beta1
/// as the only output, an unset or `true` setting leaves the field unset.
pub struct ConvertPhase;

impl Phase for ConvertPhase {
    fn name(&self) -> &'static str {
        "convert"
    }

    fn description(&self) -> &'static str {
        "Convert descriptors into the requested API versions"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let versions: Vec<String> = ctx
            .config
            .crd_versions()
            .into_iter()
            .map(String::from)
            .collect();
        let unset_preserve = match ctx.config.preserve_unknown_fields {
            None | Some(true) if ctx.config.v1beta1_only() => true,
            None | Some(false) => false,
            Some(true) => {
                bail!("you may only set preserve_unknown_fields to true with v1beta1 CRDs")
            }
        };

        for (group_kind, crd) in &ctx.descriptors {
            for version in &versions {
                let mut converted = as_version(crd, version)
                    .wrap_err_with(|| format!("cannot convert {} to {}", group_kind, version))?;

                if let Some(legacy) = converted.as_v1beta1_mut() {
                    if ctx.config.trivial_versions {
                        to_trivial_versions(legacy);
                    }
                    if unset_preserve {
                        legacy.spec.preserve_unknown_fields = None;
                    }
                }

                debug!(%group_kind, version = %version, "converted descriptor");
                ctx.versioned
                    .entry(version.clone())
                    .or_default()
                    .push((group_kind.clone(), converted));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crdgo_apiext::{
        GroupKind, VersionedCrd,
        schema::{CustomResourceValidation, JsonSchemaProps},
        v1,
    };

    use super::*;
    use crate::{config::GeneratorConfig, pipeline::Descriptors};

    fn schema(type_: &str) -> Option<CustomResourceValidation> {
        Some(CustomResourceValidation {
            open_api_v3_schema: Some(JsonSchemaProps {
                type_: type_.into(),
                ..Default::default()
            }),
        })
    }

    fn crd(group: &str, kind: &str) -> v1::CustomResourceDefinition {
        let mut crd = v1::CustomResourceDefinition::default();
        crd.spec.group = group.into();
        crd.spec.names.kind = kind.into();
        crd.spec.versions = vec![
            v1::CustomResourceDefinitionVersion {
                name: "v1".into(),
                storage: false,
                schema: schema("A"),
                ..Default::default()
            },
            v1::CustomResourceDefinitionVersion {
                name: "v1beta1".into(),
                storage: true,
                schema: schema("B"),
                ..Default::default()
            },
        ];
        crd
    }

    fn run(config: GeneratorConfig) -> Result<GenerationContext> {
        let descriptors = Descriptors::from([
            (GroupKind::new("b.io", "Beta"), crd("b.io", "Beta")),
            (GroupKind::new("a.io", "Alpha"), crd("a.io", "Alpha")),
        ]);
        let mut ctx = GenerationContext::new(config, descriptors);
        ConvertPhase.run(&mut ctx)?;
        Ok(ctx)
    }

    fn versions(names: &[&str]) -> GeneratorConfig {
        GeneratorConfig {
            crd_versions: names.iter().map(|v| v.to_string()).collect(),
            ..GeneratorConfig::new("crds")
        }
    }

    fn legacy(entry: &(GroupKind, VersionedCrd)) -> &crdgo_apiext::v1beta1::CustomResourceDefinition {
        match &entry.1 {
            VersionedCrd::V1Beta1(crd) => crd,
            other => panic!("expected v1beta1, got {}", other.version()),
        }
    }

    #[test]
    fn test_versions_in_request_order_and_descriptors_by_group() {
        let ctx = run(versions(&["v1beta1", "v1"])).unwrap();

        let keys: Vec<&str> = ctx.versioned.keys().map(String::as_str).collect();
        assert_eq!(keys, ["v1beta1", "v1"]);

        let kinds: Vec<String> = ctx.versioned["v1"].iter().map(|(gk, _)| gk.to_string()).collect();
        assert_eq!(kinds, ["Alpha.a.io", "Beta.b.io"]);
        assert!(ctx.versioned["v1"].iter().all(|(_, c)| c.version() == "v1"));
    }

    #[test]
    fn test_trivial_versions_promote_storage_schema() {
        let config = GeneratorConfig {
            trivial_versions: true,
            ..versions(&["v1beta1"])
        };
        let ctx = run(config).unwrap();

        let crd = legacy(&ctx.versioned["v1beta1"][0]);
        assert_eq!(crd.spec.validation, schema("B"));
        assert!(crd.spec.versions.iter().all(|v| v.schema.is_none()));
    }

    #[test]
    fn test_without_trivial_versions_schemas_stay_per_version() {
        let ctx = run(versions(&["v1beta1"])).unwrap();

        let crd = legacy(&ctx.versioned["v1beta1"][0]);
        assert!(crd.spec.validation.is_none());
        assert_eq!(crd.spec.versions[0].schema, schema("A"));
    }

    #[test]
    fn test_v1beta1_only_unsets_preserve_unknown_fields() {
        let ctx = run(versions(&["v1beta1"])).unwrap();
        assert_eq!(legacy(&ctx.versioned["v1beta1"][0]).spec.preserve_unknown_fields, None);

        let config = GeneratorConfig {
            preserve_unknown_fields: Some(true),
            ..versions(&["v1beta1"])
        };
        let ctx = run(config).unwrap();
        assert_eq!(legacy(&ctx.versioned["v1beta1"][0]).spec.preserve_unknown_fields, None);
    }

    #[test]
    fn test_explicit_false_is_kept() {
        let config = GeneratorConfig {
            preserve_unknown_fields: Some(false),
            ..versions(&["v1beta1"])
        };
        let ctx = run(config).unwrap();
        assert_eq!(
            legacy(&ctx.versioned["v1beta1"][0]).spec.preserve_unknown_fields,
            Some(false)
        );
    }

    #[test]
    fn test_mixed_versions_keep_false_default() {
        let ctx = run(versions(&["v1", "v1beta1"])).unwrap();
        assert_eq!(
            legacy(&ctx.versioned["v1beta1"][0]).spec.preserve_unknown_fields,
            Some(false)
        );
    }

    #[test]
    fn test_preserve_true_with_mixed_versions_fails() {
        let config = GeneratorConfig {
            preserve_unknown_fields: Some(true),
            ..versions(&["v1", "v1beta1"])
        };
        assert!(run(config).is_err());
    }

    #[test]
    fn test_preserve_true_with_v1_fails_without_descriptors() {
        let config = GeneratorConfig {
            preserve_unknown_fields: Some(true),
            ..versions(&["v1"])
        };
        let mut ctx = GenerationContext::new(config, Descriptors::new());
        assert!(ConvertPhase.run(&mut ctx).is_err());
    }

    #[test]
    fn test_unknown_version_fails() {
        let err = run(versions(&["v2"])).unwrap_err();
        assert_eq!(err.to_string(), "cannot convert Alpha.a.io to v2");
    }
}
