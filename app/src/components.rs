use leptos::prelude::*;

use crate::content::{SkillTag, CONTACT, SKILLS, SKILLS_TITLE, SOCIAL_LINKS};

/// An `<img>` with its intrinsic size set so the layout does not shift.
///
/// A `priority` image is fetched right away with a high priority, anything
/// else is left for the browser to load lazily.
#[component]
pub fn Image(
    src: &'static str,
    alt: &'static str,
    width: u32,
    height: u32,
    #[prop(optional)] priority: bool,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let (loading, fetchpriority, decoding) = if priority {
        ("eager", Some("high"), None)
    } else {
        ("lazy", None, Some("async"))
    };

    view! {
        <img
            src=src
            alt=alt
            width=width.to_string()
            height=height.to_string()
            class=class
            loading=loading
            fetchpriority=fetchpriority
            decoding=decoding
        />
    }
}

#[component]
pub fn SocialNav() -> impl IntoView {
    view! {
        <nav class="social-nav">
            <div class="social-nav__links">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a href=link.url target=link.target() class="social-nav__link">
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}

#[component]
pub fn SkillList() -> impl IntoView {
    view! {
        <div class="skills">
            <h2 class="skills__title">{SKILLS_TITLE}</h2>
            <div class="skills__list">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        view! {
                            {(i > 0)
                                .then(|| {
                                    view! { <span class="skills__separator">{SkillTag::SEPARATOR}</span> }
                                })}
                            <span class="skills__item">{skill.label}</span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// A `<button>` around the mailto link, the mail client is opened by the link.
#[component]
pub fn ContactButton() -> impl IntoView {
    view! {
        <button class="contact">
            <a href=CONTACT.target>{CONTACT.label}</a>
        </button>
    }
}
