//! Names imported from `react-native`.

use super::import_substitute;
use crate::NamespaceRewrite;

const SUBST_MODULE: &str = "tsflower/subst/react-native";

pub(crate) fn rewrites() -> NamespaceRewrite {
    NamespaceRewrite::new()
        .with_type(
            "StyleProp",
            import_substitute("RN$StyleProp", "StyleProp", SUBST_MODULE),
        )
        .with_type(
            "ViewStyle",
            import_substitute("RN$ViewStyle", "ViewStyle", SUBST_MODULE),
        )
}
