//! Hero section timing and decoration, kept free of DOM types so it can be
//! checked on the host.

use glam::DVec2;
use rand::Rng;

pub const BRAND_WORD: &str = "getvalor";
pub const BRAND_SUFFIX: &str = ".xyz";

pub const LOADING_MS: i32 = 1500;
pub const LETTER_STAGGER_SEC: f64 = 0.1;
pub const LETTER_DURATION_SEC: f64 = 0.5;
pub const LETTER_RISE_PX: f64 = 20.0;
pub const LETTER_EASING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

pub const PARALLAX_PX: f64 = 20.0;
pub const FLOATING_SHAPE_COUNT: usize = 5;

pub const DISCORD_URL: &str = "https://discord.gg/getvalor";
pub const KEY_URL: &str = "https://ads.luarmor.net/get_key?for=-gbVzmkCtUCcn";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterTone {
    Word,
    Suffix,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LetterReveal {
    pub ch: char,
    pub tone: LetterTone,
    pub delay_sec: f64,
}

/// Letters of the wordmark in display order; the suffix continues the
/// stagger where the word stops.
pub fn wordmark_reveals() -> Vec<LetterReveal> {
    BRAND_WORD
        .chars()
        .map(|ch| (ch, LetterTone::Word))
        .chain(BRAND_SUFFIX.chars().map(|ch| (ch, LetterTone::Suffix)))
        .enumerate()
        .map(|(i, (ch, tone))| LetterReveal {
            ch,
            tone,
            delay_sec: i as f64 * LETTER_STAGGER_SEC,
        })
        .collect()
}

/// Outbound call-to-action links shown under the wordmark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CallToAction {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub new_tab: bool,
    pub delay_sec: f64,
    pub duration_sec: f64,
}

pub const CALLS_TO_ACTION: [CallToAction; 2] = [
    CallToAction {
        id: "cta-discord",
        label: "Join Discord",
        href: DISCORD_URL,
        new_tab: true,
        delay_sec: 1.2,
        duration_sec: 0.8,
    },
    CallToAction {
        id: "cta-key",
        label: "Get Key",
        href: KEY_URL,
        new_tab: false,
        delay_sec: 1.4,
        duration_sec: 0.8,
    },
];

/// Backdrop translation for a pointer at `client` in a `viewport`-sized window.
/// Degenerate viewports produce no offset.
pub fn parallax_offset(client: DVec2, viewport: DVec2) -> DVec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return DVec2::ZERO;
    }
    -(client / viewport) * PARALLAX_PX
}

/// Decorative blurred circle drifting behind the hero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingShape {
    pub width_px: f64,
    pub height_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_sec: f64,
    pub delay_sec: f64,
    pub opacity: f64,
}

impl FloatingShape {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            width_px: rng.gen::<f64>() * 300.0 + 100.0,
            height_px: rng.gen::<f64>() * 300.0 + 100.0,
            left_pct: rng.gen::<f64>() * 100.0,
            top_pct: rng.gen::<f64>() * 100.0,
            duration_sec: rng.gen::<f64>() * 10.0 + 20.0,
            delay_sec: rng.gen::<f64>() * 10.0,
            opacity: rng.gen::<f64>() * 0.3,
        }
    }

    /// Inline style for the blob element.
    pub fn style(&self) -> String {
        format!(
            "width:{:.1}px;height:{:.1}px;left:{:.2}%;top:{:.2}%;animation:float {:.2}s infinite linear;animation-delay:{:.2}s;opacity:{:.3}",
            self.width_px,
            self.height_px,
            self.left_pct,
            self.top_pct,
            self.duration_sec,
            self.delay_sec,
            self.opacity
        )
    }
}

pub fn floating_shapes<R: Rng + ?Sized>(rng: &mut R) -> Vec<FloatingShape> {
    (0..FLOATING_SHAPE_COUNT)
        .map(|_| FloatingShape::random(rng))
        .collect()
}

/// Inline style that plays a rise-and-fade-in reveal.
pub fn reveal_style(delay_sec: f64, duration_sec: f64) -> String {
    format!(
        "opacity:0;transform:translateY({LETTER_RISE_PX}px);animation:rise-in {duration_sec}s {LETTER_EASING} {delay_sec:.2}s forwards"
    )
}
