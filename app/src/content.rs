//! Everything the landing page shows. Nothing here changes at runtime.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub opens_in_new_context: bool,
}

impl SocialLink {
    /// Value of the `target` attribute, if any.
    pub fn target(&self) -> Option<&'static str> {
        self.opens_in_new_context.then_some("_blank")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillTag {
    pub label: &'static str,
}

impl SkillTag {
    pub const SEPARATOR: &'static str = "\u{b7}";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
    /// Fetched eagerly with a high priority instead of lazily.
    pub priority: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactAction {
    pub label: &'static str,
    pub target: &'static str,
}

pub const OWNER: &str = "Artur Ceschin";

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/artur-peres-ceschin-desenvolvedor/",
        opens_in_new_context: true,
    },
    SocialLink {
        label: "Github",
        url: "https://github.com/Artur-Ceschin",
        opens_in_new_context: true,
    },
    SocialLink {
        label: "Youtube",
        url: "https://www.youtube.com/@arturceschin3706",
        opens_in_new_context: true,
    },
    SocialLink {
        label: "Medium",
        url: "https://medium.com/@artur.ceschin",
        opens_in_new_context: true,
    },
];

pub const PROFILE_IMAGE: ProfileImage = ProfileImage {
    src: "/profile-picture.jpeg",
    alt: OWNER,
    width: 64,
    height: 64,
    priority: true,
};

pub const HEADING: &str = "Hi, I'm Artur.";

// The bio is split around the highlighted part.
pub const BIO_LEAD: &str = "Fullstack Software Engineer who develops user-centered products. \
    Passionate to create them with engineering and design principles. Currently working on ";
pub const BIO_HIGHLIGHT: &str = "delivering high availability and scalable solutions";
pub const BIO_TRAIL: &str = " \u{26a1}";

pub const SKILLS_TITLE: &str = "Top Skills";

pub const SKILLS: [SkillTag; 4] = [
    SkillTag {
        label: "JavaScript/TypeScript",
    },
    SkillTag {
        label: "React.js/Next.js",
    },
    SkillTag { label: "Node.js" },
    SkillTag { label: "AWS" },
];

pub const CONTACT: ContactAction = ContactAction {
    label: "Say Hello",
    target: "mailto:artur.ceschin@gmail.com",
};

/// Used for the `<meta name="description">` of the document.
pub const DESCRIPTION: &str = "Artur Ceschin, Fullstack Software Engineer who develops \
    user-centered products with engineering and design principles.";
