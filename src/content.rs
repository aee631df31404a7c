//! Page content: the data every section renders.
//!
//! Content is JSON. The bundled `content/portfolio.json` is compiled in; a
//! page may override it with a `<script type="application/json"
//! id="portfolio-data">` element.

use log::{error, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

/// Id of the optional script element carrying content JSON.
pub const CONTENT_ELEMENT_ID: &str = "portfolio-data";

const BUNDLED: &str = include_str!("../content/portfolio.json");

/// Contact details shown in the about and contact sections.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Contact {
	/// Email address.
	pub email: String,
	/// Phone number as displayed.
	pub phone: String,
	/// City and country.
	pub location: String,
}

/// A spoken language and fluency level.
#[derive(Clone, Debug, Deserialize)]
pub struct Language {
	/// Language name.
	pub name: String,
	/// Fluency, e.g. "Native".
	pub level: String,
}

/// A titled bullet list inside an experience card.
#[derive(Clone, Debug, Deserialize)]
pub struct HighlightGroup {
	/// Group title.
	pub heading: String,
	/// Bullet points.
	pub items: Vec<String>,
}

/// A role or programme.
#[derive(Clone, Debug, Deserialize)]
pub struct Experience {
	/// Organisation or programme name.
	pub title: String,
	/// Role and period line under the title.
	pub subtitle: String,
	/// Optional paragraph above the groups.
	#[serde(default)]
	pub summary: Option<String>,
	/// Titled bullet lists, shown side by side.
	#[serde(default)]
	pub groups: Vec<HighlightGroup>,
	/// Untitled bullets below the groups.
	#[serde(default)]
	pub highlights: Vec<String>,
}

/// A degree or course of study.
#[derive(Clone, Debug, Deserialize)]
pub struct Education {
	/// School or university.
	pub institution: String,
	/// Degree or course.
	pub degree: String,
	/// Dates attended.
	pub period: String,
	/// Short description.
	pub summary: String,
}

/// A technical skill with a proficiency bar.
#[derive(Clone, Debug, Deserialize)]
pub struct Skill {
	/// Skill name.
	pub name: String,
	/// Proficiency percentage, 0-100.
	pub level: u8,
	/// Optional caption under the bar.
	#[serde(default)]
	pub note: Option<String>,
}

impl Skill {
	/// Bar fill percentage, capped at 100.
	pub fn percent(&self) -> u8 {
		self.level.min(100)
	}
}

/// A competitive programming profile.
#[derive(Clone, Debug, Deserialize)]
pub struct Achievement {
	/// Platform name.
	pub platform: String,
	/// Headline figure, e.g. "436+".
	pub count: String,
	/// Line under the figure.
	pub caption: String,
	/// Profile link.
	pub url: String,
}

/// A featured project card.
#[derive(Clone, Debug, Deserialize)]
pub struct Project {
	/// Project name.
	pub title: String,
	/// One-paragraph summary.
	pub description: String,
	/// Feature bullets.
	#[serde(default)]
	pub features: Vec<String>,
	/// Technology tags.
	#[serde(default)]
	pub technologies: Vec<String>,
}

/// Everything the page displays.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PortfolioContent {
	/// Owner name shown in the hero and title.
	pub name: String,
	/// Role line under the name.
	pub headline: String,
	/// Hero paragraph.
	pub intro: String,
	/// About-section paragraphs.
	pub about: Vec<String>,
	/// Contact details.
	pub contact: Contact,
	/// Spoken languages.
	pub languages: Vec<Language>,
	/// Roles, newest first.
	pub experience: Vec<Experience>,
	/// Degrees and courses.
	pub education: Vec<Education>,
	/// Technical skills with bars.
	pub skills: Vec<Skill>,
	/// Soft skills, listed without bars.
	pub soft_skills: Vec<String>,
	/// Lead paragraph of the achievements section.
	pub achievements_intro: String,
	/// Competitive programming profiles.
	pub achievements: Vec<Achievement>,
	/// Lead paragraph of the projects section.
	pub projects_intro: String,
	/// Featured projects.
	pub projects: Vec<Project>,
	/// Lead paragraph of the contact section.
	pub contact_intro: String,
	/// Footer line.
	pub footer: String,
	/// Background skin preset name.
	pub background: String,
}

impl PortfolioContent {
	/// Parse content JSON. Missing fields take their defaults.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}

	/// Content compiled into the binary.
	pub fn bundled() -> Self {
		Self::from_json(BUNDLED).unwrap_or_else(|e| {
			error!("portfolio: bundled content is invalid: {}", e);
			Self::default()
		})
	}
}

fn content_from_dom() -> Option<PortfolioContent> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONTENT_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match PortfolioContent::from_json(&json_text) {
		Ok(content) => {
			info!("portfolio: loaded content for {}", content.name);
			Some(content)
		}
		Err(e) => {
			warn!("portfolio: failed to parse page content: {}", e);
			None
		}
	}
}

/// Content from the page if present and valid, otherwise the bundled copy.
pub fn load_content() -> PortfolioContent {
	content_from_dom().unwrap_or_else(PortfolioContent::bundled)
}
