//! Render phase - writes the scheme registration and values files.

use crdgo_apiext::{META_PACKAGE, V1_PACKAGE, V1BETA1_PACKAGE};
use crdgo_core::{File, capitalize, non_vendor_path};
use crdgo_ir::Value;
use eyre::Result;
use tracing::{debug, info};

use crate::{
    builder::{Entry, Expr},
    go_file::{FuncDecl, GoFile},
    imports::ImportScope,
    pipeline::{Diagnostic, GenerationContext, Phase},
    serializer::{Serializer, Unsupported},
};

/// Registers every descriptor package with the client scheme.
pub const SCHEME_FILE: &str = "zz.generated.scheme.go";

/// Holds one `New<Version>Set` function per requested version.
pub const CRDS_FILE: &str = "zz.generated.crds.go";

const SCHEME_PACKAGE: &str = "k8s.io/client-go/kubernetes/scheme";

/// Phase that renders the generated Go files.
///
/// Both files share the run's import registry, so a package has the same
/// alias everywhere. Values the serializer cannot express become warnings.
pub struct RenderPhase;

impl Phase for RenderPhase {
    fn name(&self) -> &'static str {
        "render"
    }

    fn description(&self) -> &'static str {
        "Render the scheme and values files"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        if ctx.descriptors.is_empty() {
            debug!("no descriptors, skipping render");
            return Ok(());
        }

        let scheme = render_scheme(ctx);
        ctx.files.push(File::new(SCHEME_FILE, scheme));

        let (crds, gaps) = render_crds(ctx);
        ctx.files.push(File::new(CRDS_FILE, crds));

        for gap in gaps {
            ctx.add_diagnostic(Diagnostic::warning("render", gap.reason.to_string()).at(gap.path));
        }

        info!(
            descriptors = ctx.descriptors.len(),
            versions = ctx.versioned.len(),
            "rendered {} files",
            ctx.files.len()
        );
        Ok(())
    }
}

/// Packages whose `AddToScheme` is called: apiextensions v1beta1 and v1,
/// then each configured package once, vendor prefix stripped and metav1
/// left out.
pub fn scheme_packages(configured: &[String]) -> Vec<String> {
    let mut packages = vec![V1BETA1_PACKAGE.to_string(), V1_PACKAGE.to_string()];
    for package in configured {
        let package = non_vendor_path(package);
        if package != META_PACKAGE && !packages.iter().any(|p| p == package) {
            packages.push(package.to_string());
        }
    }
    packages
}

fn render_scheme(ctx: &mut GenerationContext) -> String {
    let packages = scheme_packages(&ctx.config.scheme_packages);
    let mut scope = ImportScope::new(&mut ctx.imports);

    let target = scope.qualify(SCHEME_PACKAGE, "Scheme");
    let mut init = FuncDecl::new("init");
    for package in &packages {
        init = init.statement(Expr::call(
            scope.qualify(package, "AddToScheme"),
            vec![Expr::raw(target.clone())],
        ));
    }

    GoFile::new(ctx.config.package_name.clone())
        .header(ctx.header.clone())
        .imports(scope.imports())
        .add(init)
        .render()
}

fn render_crds(ctx: &mut GenerationContext) -> (String, Vec<Unsupported>) {
    let mut serializer = Serializer::new(&mut ctx.imports);
    let mut funcs = Vec::with_capacity(ctx.versioned.len());

    for (version, crds) in &ctx.versioned {
        let Some(package) = crds.first().map(|(_, crd)| crd.package()) else {
            continue;
        };
        let slice = format!(
            "[]*{}",
            serializer.scope().qualify(package, "CustomResourceDefinition")
        );

        let items = crds
            .iter()
            .filter_map(|(group_kind, crd)| {
                let root = format!("{}:{}", version, group_kind);
                serializer
                    .serialize_at(&root, &Value::pointer_to(crd.reflect()), false)
                    .expr()
            })
            .map(Entry::positional)
            .collect();

        funcs.push(
            FuncDecl::new(format!("New{}Set", capitalize(version)))
                .directive("nolint")
                .returns(slice.clone())
                .returning(&Expr::composite(Some(slice), items)),
        );
    }

    let (imports, gaps) = serializer.finish();
    let mut file = GoFile::new(ctx.config.package_name.clone())
        .header(ctx.header.clone())
        .imports(imports);
    for func in funcs {
        file = file.add(func);
    }
    (file.render(), gaps)
}
