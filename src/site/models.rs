use crate::prelude::*;

// typed mirrors of the json documents. each document is an object
// with its items under a named key, consumed in array order

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeaderData {
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub nav: Vec<String>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}


#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AboutData {
    #[serde(default)]
    pub paragraphs: Vec<String>,
}


#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExperienceData {
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub year: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}


#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AchievementsData {
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(default)]
    pub year: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,

    /// key into the easter egg kind set, missing or unknown means plain
    #[serde(default)]
    pub easter_egg: Option<String>,

    /// hover image, the kind lookup table fills in when absent
    #[serde(default)]
    pub image: Option<String>,
}


#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectsData {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// missing images fall back to an empty src, rendering nothing
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,

    /// id of the blog entry this project links to
    #[serde(default)]
    pub blog_id: Option<String>,
}


#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlogsData {
    #[serde(default)]
    pub blogs: Vec<Blog>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    /// markdown body, converted to html before display
    #[serde(default)]
    pub content: String,
}
