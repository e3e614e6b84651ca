use leptos::*;

const BASE_CLASS: &str = "px-6 py-3 rounded-full font-bold transition-all duration-200 flex items-center justify-center gap-2 cursor-pointer active:scale-95";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-electric text-black hover:bg-[#e5c100] shadow-md hover:shadow-lg",
            ButtonVariant::Secondary => "bg-gray-100 text-gray-600 hover:bg-gray-200",
            ButtonVariant::Outline => "border-2 border-gray-900 text-gray-900 hover:bg-gray-50",
            ButtonVariant::Ghost => "bg-transparent text-gray-600 hover:text-gray-900",
        }
    }
}

/// Base, variant and caller classes joined in that order
pub fn button_classes(variant: ButtonVariant, extra: &str) -> String {
    let mut classes = format!("{} {}", BASE_CLASS, variant.class());
    let extra = extra.trim();
    if !extra.is_empty() {
        classes.push(' ');
        classes.push_str(extra);
    }
    classes
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=button_classes(variant, &class)
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.call(());
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variant_is_primary() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn test_button_classes() {
        let classes = button_classes(ButtonVariant::Outline, "  w-full justify-center ");

        assert!(classes.starts_with(BASE_CLASS));
        assert!(classes.contains("border-2 border-gray-900"));
        assert!(classes.ends_with("w-full justify-center"));
    }

    #[test]
    fn test_button_classes_without_extra() {
        assert_eq!(
            button_classes(ButtonVariant::Ghost, ""),
            format!("{} {}", BASE_CLASS, ButtonVariant::Ghost.class())
        );
    }
}
