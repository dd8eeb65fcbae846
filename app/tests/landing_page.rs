use app::content::{CONTACT, SKILLS, SOCIAL_LINKS};
use app::pages::home::LandingPage;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pretty_assertions::assert_eq;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn render() -> String {
    let html = view! { <LandingPage /> }.to_html();
    log::debug!("rendered landing page: {}", html);
    html
}

#[test]
fn four_social_links_open_in_a_new_tab() {
    setup();

    let html = render();
    assert_eq!(4, html.matches(r#"target="_blank""#).count());
    for (link, url) in SOCIAL_LINKS.iter().zip([
        "https://www.linkedin.com/in/artur-peres-ceschin-desenvolvedor/",
        "https://github.com/Artur-Ceschin",
        "https://www.youtube.com/@arturceschin3706",
        "https://medium.com/@artur.ceschin",
    ]) {
        assert_eq!(url, link.url);
        let anchor = format!(r#"<a href="{}" target="_blank""#, url);
        assert!(html.contains(&anchor), "missing {}", anchor);
        assert!(html.contains(link.label));
    }
}

#[test]
fn social_links_come_before_the_content() {
    setup();

    let html = render();
    let nav = html.find("</nav>").unwrap();
    let main = html.find("<main").unwrap();
    assert!(nav < main);
    let positions: Vec<usize> = ["LinkedIn", "Github", "Youtube", "Medium"]
        .iter()
        .map(|label| html.find(label).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn profile_image_is_a_64px_square() {
    setup();

    let html = render();
    let start = html.find("<img").unwrap();
    let img = &html[start..start + html[start..].find('>').unwrap()];
    assert!(img.contains(r#"src="/profile-picture.jpeg""#));
    assert!(img.contains(r#"alt="Artur Ceschin""#));
    assert!(img.contains(r#"width="64""#));
    assert!(img.contains(r#"height="64""#));
    assert!(img.contains(r#"loading="eager""#));
    assert!(!img.contains(r#"loading="lazy""#));
}

#[test]
fn heading_has_a_plain_apostrophe() {
    setup();

    let html = render();
    assert!(html.contains("Hi, I'm Artur."));
    assert!(!html.contains("&apos;"));
    assert!(!html.contains("&amp;"));
}

#[test]
fn bio_highlights_the_current_work() {
    setup();

    let html = render();
    assert!(html.contains("Fullstack Software Engineer who develops user-centered products."));
    assert!(html.contains(
        r#"<span class="landing__highlight">delivering high availability and scalable solutions</span>"#
    ));
}

#[test]
fn skills_are_listed_in_order() {
    setup();

    let html = render();
    let mut last = 0;
    for skill in SKILLS.iter() {
        let at = html[last..]
            .find(skill.label)
            .unwrap_or_else(|| panic!("{} is missing or out of order", skill.label));
        last += at + skill.label.len();
    }
    assert_eq!(3, html.matches('\u{b7}').count());
}

#[test]
fn contact_button_opens_the_mail_client() {
    setup();

    let html = render();
    assert_eq!("mailto:artur.ceschin@gmail.com", CONTACT.target);
    let button = &html[html.find("<button").unwrap()..html.find("</button>").unwrap()];
    assert!(button.contains(r#"href="mailto:artur.ceschin@gmail.com""#));
    assert!(button.contains("Say Hello"));
}

#[test]
fn rendering_is_idempotent() {
    setup();

    assert_eq!(render(), render());
}
