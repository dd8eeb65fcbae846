use leptos::prelude::*;

use crate::components::{ContactButton, Image, SkillList, SocialNav};
use crate::content::{BIO_HIGHLIGHT, BIO_LEAD, BIO_TRAIL, HEADING, PROFILE_IMAGE};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <SocialNav />
            <main class="landing__main">
                <div class="landing__column">
                    <div class="avatar">
                        <Image
                            src=PROFILE_IMAGE.src
                            alt=PROFILE_IMAGE.alt
                            width=PROFILE_IMAGE.width
                            height=PROFILE_IMAGE.height
                            priority=PROFILE_IMAGE.priority
                            class="avatar__image"
                        />
                    </div>
                    <h1 class="landing__heading">{HEADING}</h1>
                    <p class="landing__bio">
                        {BIO_LEAD}
                        <span class="landing__highlight">{BIO_HIGHLIGHT}</span>
                        {BIO_TRAIL}
                    </p>
                    <SkillList />
                    <ContactButton />
                </div>
            </main>
        </div>
    }
}
