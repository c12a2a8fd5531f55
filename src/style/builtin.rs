//! Built-in stylesheets for text and view elements.

use once_cell::sync::Lazy;

use super::fragment::StyleFragment;
use super::stylesheet::Stylesheet;

fn f() -> StyleFragment {
    StyleFragment::new()
}

static TEXT_STYLES: Lazy<Stylesheet> = Lazy::new(|| {
    Stylesheet::new()
        .add(
            "default",
            f().set("fontFamily", "Helvetica")
                .set("fontSize", 12)
                .set("color", "black"),
        )
        .add("primary", f().set("color", "black").set("fontSize", 16))
        .add("black", f().set("color", "black"))
        .add("gray", f().set("color", "gray"))
        .add("white", f().set("color", "white"))
        .add("link", f().set("color", "blue"))
        .add("error", f().set("color", "red"))
        // Size steps
        .add("l", f().set("fontSize", 30))
        .add("m", f().set("fontSize", 24))
        .add("ms", f().set("fontSize", 18))
        .add("s", f().set("fontSize", 16))
        .add("xs", f().set("fontSize", 14))
        .add("xxs", f().set("fontSize", 12))
        .add("left", f().set("textAlign", "left"))
        .add("center", f().set("textAlign", "center"))
        .add("right", f().set("textAlign", "right"))
        .add("bold", f().set("fontWeight", "bold"))
        .add(
            "xbold",
            f().set("fontWeight", "bold").set("fontFamily", "Helvetica-Bold"),
        )
        .add("underline", f().set("textDecoration", "underline"))
        .add("pad", f().set("padding", 14))
        .add("rounded", f().set("borderRadius", 8).set("overflow", "hidden"))
        .add("xrounded", f().set("borderRadius", 12).set("overflow", "hidden"))
        .add(
            "chip",
            f().set("padding", 5)
                .set("color", "white")
                .set("fontSize", 14)
                .set("textAlign", "center")
                .set("fontWeight", "bold")
                .set("borderRadius", 8)
                .set("overflow", "hidden"),
        )
        .add("uppercase", f().set("textTransform", "uppercase"))
        .add(
            "tab",
            f().set("marginLeft", 10)
                .set("backgroundColor", "white")
                .set("borderTopRightRadius", 12)
                .set("borderTopLeftRadius", 12),
        )
        .add("flex", f().set("flex", 1))
        .add("outline", f().set("borderColor", "grey").set("borderWidth", 1))
        .add(
            "highlight",
            f().set("color", "white").set("backgroundColor", "grey"),
        )
        .add("redBg", f().set("backgroundColor", "red"))
        .add("greenBg", f().set("backgroundColor", "green"))
        .add("orangeBg", f().set("backgroundColor", "orange"))
        .add("colorTab", f().set("color", "black"))
        .add("colorLabel", f().set("color", "blue"))
        .add("colorHint", f().set("color", "green"))
});

static VIEW_STYLES: Lazy<Stylesheet> = Lazy::new(|| {
    Stylesheet::new()
        .add("default", f())
        .add("flex", f().set("flex", 1))
        .add("flex3", f().set("flex", 3))
        .add("overflowHidden", f().set("overflow", "hidden"))
        .add("rounded", f().set("overflow", "hidden").set("borderRadius", 8))
        .add(
            "row",
            f().set("flexDirection", "row").set("alignItems", "center"),
        )
        .add("column", f().set("flexDirection", "column"))
        // Cross axis
        .add("left", f().set("alignItems", "flex-start"))
        .add("center", f().set("alignItems", "center"))
        .add("right", f().set("alignItems", "flex-end"))
        // Main axis
        .add("start", f().set("justifyContent", "flex-start"))
        .add("middle", f().set("justifyContent", "center"))
        .add("end", f().set("justifyContent", "flex-end"))
        .add("space", f().set("justifyContent", "space-between"))
        .add("bgRed", f().set("backgroundColor", "red"))
        .add("bgYellow", f().set("backgroundColor", "yellow"))
        .add(
            "outlineRed",
            f().set("borderWidth", 2)
                .set("borderRadius", 8)
                .set("borderColor", "red"),
        )
        .add(
            "underline",
            f().set("borderBottomWidth", 1).set("borderColor", "#888888"),
        )
        .add("gap", f().set("gap", 20))
        .add("sgap", f().set("gap", 10))
        .add("pad", f().set("padding", 20))
        .add(
            "hpad",
            f().set("paddingHorizontal", 20).set("paddingVertical", 10),
        )
        .add("nhmargin", f().set("marginHorizontal", -20))
        .add("nhsmargin", f().set("marginHorizontal", -10))
        .add("nmargin", f().set("margin", -20))
        .add("spad", f().set("padding", 10))
        .add("xspad", f().set("padding", 5))
        .add("outline", f().set("borderWidth", 1).set("borderRadius", 8))
        .add("background", f().set("backgroundColor", "#fff"))
        .add("backgroundAlpha", f().set("backgroundColor", "#fffe"))
        .add("section", f().set("backgroundColor", "#8882"))
        .add("darker", f().set("backgroundColor", "#8882"))
        .add(
            "nest",
            f().set("backgroundColor", "#8882")
                .set("padding", 20)
                .set("marginHorizontal", -20),
        )
        .add(
            "extend",
            f().set("paddingHorizontal", 20).set("marginHorizontal", -20),
        )
        .add(
            "extends",
            f().set("paddingHorizontal", 15).set("marginHorizontal", -15),
        )
        .add("minWidth", f().set("minWidth", 150).set("width", "100%"))
        .add("narrow", f().set("maxWidth", 300).set("width", "100%"))
        .add("wide", f().set("maxWidth", 600).set("width", "100%"))
        .add("selfcenter", f().set("alignSelf", "center"))
        .add("hidden", f().set("height", 0))
        .add("mediumSquare", f().set("minWidth", 120).set("minHeight", 120))
        .add(
            "card",
            f().set("flex", 1)
                .set("padding", 10)
                .set("gap", 10)
                .set("borderWidth", 0.5)
                .set("borderRadius", 8)
                .set("borderColor", "grey"),
        )
        .add(
            "select",
            f().set("backgroundColor", "blue").set("padding", 10),
        )
        .add("unselect", f().set("padding", 10))
});

/// The default stylesheet for [`StyledText`](crate::element::StyledText).
pub fn text_styles() -> &'static Stylesheet {
    &TEXT_STYLES
}

/// The default stylesheet for [`StyledView`](crate::element::StyledView).
///
/// Render contexts start out with this sheet; a
/// [`Provider`](crate::element::Provider) can swap it for a subtree.
pub fn view_styles() -> &'static Stylesheet {
    &VIEW_STYLES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn test_builtin_sheets_validate() {
        assert!(text_styles().validate().is_ok());
        assert!(view_styles().validate().is_ok());
    }

    #[test]
    fn test_text_default() {
        let default = text_styles().default_fragment();
        assert_eq!(default.get("fontFamily"), Some(&StyleValue::from("Helvetica")));
        assert_eq!(default.get("fontSize"), Some(&StyleValue::from(12)));
    }

    #[test]
    fn test_view_default_is_empty() {
        assert!(view_styles().has("default"));
        assert!(view_styles().default_fragment().is_empty());
    }

    #[test]
    fn test_size_steps_follow_colors() {
        let names: Vec<&str> = text_styles().flags().map(|(n, _)| n).collect();
        let error = names.iter().position(|n| *n == "error").unwrap();
        let large = names.iter().position(|n| *n == "l").unwrap();
        assert!(error < large);
    }
}
