use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Ar,
}

impl Locale {
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Ar => "عربي",
        }
    }

    pub fn next(self) -> Locale {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    /// Value for the HTML `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Locale::En => "ltr",
            Locale::Ar => "rtl",
        }
    }
}

/// Get the current locale from Dioxus context.
/// Must be called inside a component where `provide_context` was used.
pub fn use_locale() -> Signal<Locale> {
    use_context::<Signal<Locale>>()
}

/// Tag shown in every card footer, whatever the UI locale.
pub const ARABIC_LANGUAGE_TAG: &str = "اللغة العربية";

/// All translatable strings in the application.
/// Call `t(locale)` to get the struct for a given locale.
pub struct T {
    // ── Header ──
    pub app_title: &'static str,
    pub app_subtitle: &'static str,

    // ── Generate panel ──
    pub generate_title: &'static str,
    pub generate_description: &'static str,
    pub generate_button: &'static str,
    pub generating_label: &'static str,

    // ── Error alert ──
    pub error_title: &'static str,
    pub dismiss: &'static str,
    pub err_unreachable: &'static str,
    pub err_status: &'static str,
    pub err_invalid_data: &'static str,
    pub err_invalid_shape: &'static str,
    pub err_unexpected: &'static str,

    // ── Results ──
    pub generated_dialogues: &'static str,
    pub generated_at: &'static str,
    pub dialogue_badge: &'static str,
    pub speaker_a: &'static str,
    pub speaker_b: &'static str,
}

pub fn t(locale: Locale) -> T {
    match locale {
        Locale::En => T {
            app_title: "Arabic Dialogue Corpus",
            app_subtitle: "Generate authentic Arabic conversations for language learning and cultural understanding",

            generate_title: "Generate Dialogues",
            generate_description: "Click below to create realistic Arabic conversations on various topics",
            generate_button: "Generate Dialogues",
            generating_label: "Generating…",

            error_title: "Error",
            dismiss: "Dismiss",
            err_unreachable: "Cannot connect to the server. Please ensure the dialogue backend is running.",
            err_status: "Server responded with",
            err_invalid_data: "Received invalid data from server. The response format may have changed.",
            err_invalid_shape: "The server sent dialogues in an unexpected shape.",
            err_unexpected: "An unexpected error occurred. Please try again.",

            generated_dialogues: "Generated Dialogues",
            generated_at: "Generated at",
            dialogue_badge: "Dialogue",
            speaker_a: "Speaker A",
            speaker_b: "Speaker B",
        },
        Locale::Ar => T {
            app_title: "مدونة الحوارات العربية",
            app_subtitle: "حوارات عربية أصيلة لتعلّم اللغة وفهم الثقافة",

            generate_title: "توليد الحوارات",
            generate_description: "اضغط أدناه لإنشاء محادثات عربية واقعية في مواضيع متنوعة",
            generate_button: "توليد الحوارات",
            generating_label: "جارٍ التوليد…",

            error_title: "خطأ",
            dismiss: "إغلاق",
            err_unreachable: "تعذّر الاتصال بالخادم. تأكد من تشغيل خادم الحوارات.",
            err_status: "استجاب الخادم بالرمز",
            err_invalid_data: "وصلت بيانات غير صالحة من الخادم. ربما تغيّر تنسيق الاستجابة.",
            err_invalid_shape: "أرسل الخادم الحوارات بشكل غير متوقع.",
            err_unexpected: "حدث خطأ غير متوقع. يرجى المحاولة مرة أخرى.",

            generated_dialogues: "الحوارات المولّدة",
            generated_at: "وقت التوليد",
            dialogue_badge: "حوار",
            speaker_a: "المتحدث أ",
            speaker_b: "المتحدث ب",
        },
    }
}

/// Card footer count: "1 message", "2 messages".
pub fn message_count(locale: Locale, n: usize) -> String {
    match locale {
        Locale::En if n == 1 => "1 message".to_string(),
        Locale::En => format!("{n} messages"),
        Locale::Ar => arabic_count(n, "رسالة واحدة", "رسالتان", "رسائل", "رسالة"),
    }
}

/// Results header count: "1 conversation generated".
pub fn conversations_generated(locale: Locale, n: usize) -> String {
    match locale {
        Locale::En if n == 1 => "1 conversation generated".to_string(),
        Locale::En => format!("{n} conversations generated"),
        Locale::Ar => arabic_count(n, "محادثة واحدة", "محادثتان", "محادثات", "محادثة"),
    }
}

/// Arabic counted noun: plural for zero, singular, dual, plural for 3–10,
/// singular otherwise.
fn arabic_count(n: usize, one: &str, two: &str, few: &str, many: &str) -> String {
    match n {
        0 => format!("0 {few}"),
        1 => one.to_string(),
        2 => two.to_string(),
        3..=10 => format!("{n} {few}"),
        _ => format!("{n} {many}"),
    }
}
