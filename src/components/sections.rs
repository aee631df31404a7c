//! Page sections, in document order.
//!
//! Each section renders a slice of [`PortfolioContent`] inside an element
//! whose id matches the scroll-spy section ids.

use leptos::prelude::*;

use super::navigation::scroll_to_section;
use super::reveal::Reveal;
use crate::content::{
	Achievement, Contact, Education, Experience, Language, PortfolioContent, Project, Skill,
};

#[component]
fn SectionHeading(
	#[prop(into)] title: String,
	#[prop(optional, into)] lead: Option<String>,
) -> impl IntoView {
	view! {
		<Reveal class="section-heading">
			<h2>{title}</h2>
			<div class="section-rule"></div>
			{lead.map(|text| view! { <p class="section-lead">{text}</p> })}
		</Reveal>
	}
}

fn bullet_list(items: Vec<String>) -> impl IntoView {
	view! {
		<ul class="bullets">
			{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
		</ul>
	}
}

#[component]
fn Hero(name: String, headline: String, intro: String) -> impl IntoView {
	view! {
		<section id="hero" class="section hero">
			<div class="hero-glow hero-glow-a"></div>
			<div class="hero-glow hero-glow-b"></div>
			<Reveal class="hero-content">
				<h1>"Hi, I'm " {name}</h1>
				<div class="hero-headline">{headline}</div>
				<p class="hero-intro">{intro}</p>
				<div class="hero-actions">
					<button class="btn btn-primary" on:click=move |_| scroll_to_section("projects")>
						"View My Projects"
					</button>
					<button class="btn btn-outline" on:click=move |_| scroll_to_section("contact")>
						"Get In Touch"
					</button>
				</div>
			</Reveal>
			<button
				class="hero-scroll-hint"
				aria-label="Scroll to about"
				on:click=move |_| scroll_to_section("about")
			>
				"⌄"
			</button>
		</section>
	}
}

#[component]
fn About(paragraphs: Vec<String>, contact: Contact, languages: Vec<Language>) -> impl IntoView {
	view! {
		<section id="about" class="section">
			<SectionHeading title="About Me" />
			<div class="grid two">
				<Reveal class="card">
					{paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
				</Reveal>
				<Reveal class="about-details">
					<div class="detail">{contact.location}</div>
					<div class="detail">{contact.phone}</div>
					<div class="detail">{contact.email}</div>
					<h3>"Languages"</h3>
					{languages
						.into_iter()
						.map(|lang| {
							view! {
								<div class="language">
									<span>{lang.name}</span>
									<span class="badge">{lang.level}</span>
								</div>
							}
						})
						.collect_view()}
				</Reveal>
			</div>
		</section>
	}
}

#[component]
fn ExperienceSection(entries: Vec<Experience>) -> impl IntoView {
	view! {
		<section id="experience" class="section">
			<SectionHeading title="Experience" />
			{entries
				.into_iter()
				.map(|entry| {
					view! {
						<Reveal class="card">
							<h3>{entry.title}</h3>
							<div class="card-subtitle">{entry.subtitle}</div>
							{entry.summary.map(|s| view! { <p>{s}</p> })}
							<div class="grid two">
								{entry
									.groups
									.into_iter()
									.map(|group| {
										view! {
											<div>
												<h4>{group.heading}</h4>
												{bullet_list(group.items)}
											</div>
										}
									})
									.collect_view()}
							</div>
							{(!entry.highlights.is_empty()).then(|| bullet_list(entry.highlights))}
						</Reveal>
					}
				})
				.collect_view()}
		</section>
	}
}

#[component]
fn EducationSection(entries: Vec<Education>) -> impl IntoView {
	view! {
		<section id="education" class="section">
			<SectionHeading title="Education" />
			{entries
				.into_iter()
				.map(|entry| {
					view! {
						<Reveal class="card">
							<h3>{entry.institution}</h3>
							<div class="card-subtitle">{entry.degree}</div>
							<div class="card-period">{entry.period}</div>
							<p>{entry.summary}</p>
						</Reveal>
					}
				})
				.collect_view()}
		</section>
	}
}

#[component]
fn Skills(skills: Vec<Skill>, soft_skills: Vec<String>) -> impl IntoView {
	view! {
		<section id="skills" class="section">
			<SectionHeading title="Skills & Technologies" />
			<div class="grid two">
				<Reveal class="card">
					<h3>"Technical Skills"</h3>
					{skills
						.into_iter()
						.map(|skill| {
							let percent = skill.percent();
							view! {
								<div class="skill">
									<div class="skill-label">
										<span>{skill.name}</span>
										<span>{format!("{percent}%")}</span>
									</div>
									<div class="skill-track">
										<div class="skill-fill" style=format!("width: {percent}%;")></div>
									</div>
									{skill.note.map(|note| view! { <div class="skill-note">{note}</div> })}
								</div>
							}
						})
						.collect_view()}
				</Reveal>
				<Reveal class="card">
					<h3>"Soft Skills"</h3>
					<div class="grid two">
						{soft_skills
							.into_iter()
							.map(|skill| view! { <div class="soft-skill">{skill}</div> })
							.collect_view()}
					</div>
				</Reveal>
			</div>
		</section>
	}
}

#[component]
fn Achievements(#[prop(into)] lead: String, entries: Vec<Achievement>) -> impl IntoView {
	view! {
		<section id="achievements" class="section">
			<SectionHeading title="Coding Achievements" lead=lead />
			<div class="grid two">
				{entries
					.into_iter()
					.map(|entry| {
						view! {
							<Reveal class="card achievement">
								<h3>{entry.platform}</h3>
								<div class="achievement-count">{entry.count}</div>
								<p>{entry.caption}</p>
								<a href=entry.url target="_blank" rel="noopener noreferrer">
									"View Profile ↗"
								</a>
							</Reveal>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

#[component]
fn Projects(#[prop(into)] lead: String, entries: Vec<Project>) -> impl IntoView {
	view! {
		<section id="projects" class="section">
			<SectionHeading title="Featured Projects" lead=lead />
			<div class="grid two">
				{entries
					.into_iter()
					.map(|project| {
						view! {
							<Reveal class="card project">
								<h3>{project.title}</h3>
								<p>{project.description}</p>
								{bullet_list(project.features)}
								<div class="tags">
									{project
										.technologies
										.into_iter()
										.map(|tech| view! { <span class="badge">{tech}</span> })
										.collect_view()}
								</div>
							</Reveal>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

#[component]
fn ContactSection(#[prop(into)] lead: String, contact: Contact) -> impl IntoView {
	let mailto = format!("mailto:{}", contact.email);
	let tel = format!("tel:{}", contact.phone);
	view! {
		<section id="contact" class="section">
			<SectionHeading title="Let's Connect" lead=lead />
			<div class="grid three">
				<Reveal class="card contact">
					<h3>"Email"</h3>
					<a href=mailto>{contact.email}</a>
				</Reveal>
				<Reveal class="card contact">
					<h3>"Phone"</h3>
					<a href=tel>{contact.phone}</a>
				</Reveal>
				<Reveal class="card contact">
					<h3>"Location"</h3>
					<p>{contact.location}</p>
				</Reveal>
			</div>
		</section>
	}
}

/// All page sections followed by the footer.
#[component]
pub fn Sections(
	/// Text for every section.
	content: PortfolioContent,
) -> impl IntoView {
	let PortfolioContent {
		name,
		headline,
		intro,
		about,
		contact,
		languages,
		experience,
		education,
		skills,
		soft_skills,
		achievements_intro,
		achievements,
		projects_intro,
		projects,
		contact_intro,
		footer,
		background: _,
	} = content;
	let about_contact = contact.clone();

	view! {
		<main>
			<Hero name=name headline=headline intro=intro />
			<About paragraphs=about contact=about_contact languages=languages />
			<ExperienceSection entries=experience />
			<EducationSection entries=education />
			<Skills skills=skills soft_skills=soft_skills />
			<Achievements lead=achievements_intro entries=achievements />
			<Projects lead=projects_intro entries=projects />
			<ContactSection lead=contact_intro contact=contact />
		</main>
		<footer class="footer">
			<p>{footer}</p>
		</footer>
	}
}
