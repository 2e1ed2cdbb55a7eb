use std::rc::Rc;

use yew::prelude::*;

use crate::catalog::ProjectCatalog;
use crate::components::contact_form::ContactForm;
use crate::components::lazy_image::LazyImage;
use crate::components::navbar::{Navbar, SectionRef};
use crate::components::project_modal::Portfolio;
use crate::components::reveal::Reveal;
use crate::components::typing::TypingText;
use crate::nav::NavLink;
use crate::reveal::RevealVariant;

pub const BRAND: &str = "Hamza Web Solutions";

const NAV_LINKS: [NavLink; 5] = [
    NavLink::new("Home", "#home"),
    NavLink::new("About", "#about"),
    NavLink::new("Services", "#services"),
    NavLink::new("Portfolio", "#portfolio"),
    NavLink::new("Contact", "#contact"),
];

const SERVICES: [(&str, &str); 4] = [
    ("Web Development", "Custom websites built from scratch with clean, fast and maintainable code."),
    ("Responsive Design", "Layouts that look sharp on phones, tablets and desktops alike."),
    ("SEO Optimization", "Technical SEO that helps local customers in Multan find your business."),
    ("Maintenance & Support", "Updates, backups and fixes so your site keeps running smoothly."),
];

const FEATURES: [(&str, &str); 3] = [
    ("Fast Delivery", "Most projects go live within two to four weeks."),
    ("Fair Pricing", "Clear quotes with no hidden costs."),
    ("Local Partner", "Meet in person, anywhere in Multan."),
];

const STATS: [(&str, &str); 3] = [("50+", "Projects Completed"), ("30+", "Happy Clients"), ("3+", "Years Experience")];

fn section_refs() -> Vec<SectionRef> {
    NAV_LINKS
        .iter()
        .map(|link| SectionRef {
            id: link.href.trim_start_matches('#'),
            node: NodeRef::default(),
        })
        .collect()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let catalog = use_context::<Rc<ProjectCatalog>>()
        .unwrap_or_else(|| Rc::new(ProjectCatalog::builtin()));
    let sections = use_memo(|_| section_refs(), ());
    let node = |id: &str| {
        sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.node.clone())
            .unwrap_or_default()
    };

    html! {
        <>
            <Navbar brand={BRAND} links={NAV_LINKS.to_vec()} sections={(*sections).clone()} />

            <section id="home" class="hero" ref={node("home")}>
                <div class="hero-container">
                    <Reveal class="hero-content" variant={RevealVariant::Left}>
                        <h1 class="hero-title">{"Best Website Developer in Multan"}</h1>
                        <p class="hero-tagline">
                            <TypingText text="Modern, fast and affordable websites for growing businesses." />
                        </p>
                        <div class="hero-buttons">
                            <a href="#portfolio" class="btn btn-primary">{"View My Work"}</a>
                            <a href="#contact" class="btn btn-secondary">{"Get In Touch"}</a>
                        </div>
                    </Reveal>
                    <Reveal class="hero-visual" variant={RevealVariant::Right}>
                        <LazyImage src="/assets/hero.webp" alt="Laptop showing a finished website" />
                    </Reveal>
                </div>
            </section>

            <section id="about" class="about" ref={node("about")}>
                <div class="container">
                    <h2 class="section-title">{"About Me"}</h2>
                    <div class="about-content">
                        <Reveal class="about-text" variant={RevealVariant::Left}>
                            <p>
                                {"I am a software developer based in Multan who builds websites that load fast, \
                                  rank well and turn visitors into customers."}
                            </p>
                        </Reveal>
                        <Reveal class="about-stats" variant={RevealVariant::Right}>
                            { for STATS.iter().map(|(value, label)| html! {
                                <div class="stat">
                                    <span class="stat-number">{ *value }</span>
                                    <span class="stat-label">{ *label }</span>
                                </div>
                            }) }
                        </Reveal>
                    </div>
                </div>
            </section>

            <section id="services" class="services" ref={node("services")}>
                <div class="container">
                    <h2 class="section-title">{"Services"}</h2>
                    <div class="services-grid">
                        { for SERVICES.iter().enumerate().map(|(index, (title, text))| html! {
                            <Reveal class="service-card" stagger={Some(index)}>
                                <h3>{ *title }</h3>
                                <p>{ *text }</p>
                            </Reveal>
                        }) }
                    </div>
                    <div class="features-grid">
                        { for FEATURES.iter().enumerate().map(|(index, (title, text))| html! {
                            <Reveal class="feature-card" stagger={Some(index)}>
                                <h4>{ *title }</h4>
                                <p>{ *text }</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id="portfolio" class="portfolio" ref={node("portfolio")}>
                <div class="container">
                    <h2 class="section-title">{"Portfolio"}</h2>
                    {
                        if catalog.is_empty() {
                            html! { <p class="portfolio-empty">{"Projects are coming soon."}</p> }
                        } else {
                            html! { <Portfolio catalog={catalog.clone()} /> }
                        }
                    }
                </div>
            </section>

            <section id="contact" class="contact" ref={node("contact")}>
                <div class="container">
                    <h2 class="section-title">{"Contact"}</h2>
                    <div class="contact-content">
                        <Reveal class="contact-info" variant={RevealVariant::Left}>
                            <h3>{"Let's build your website"}</h3>
                            <p>{"Tell me about your project and I'll reply within a day."}</p>
                        </Reveal>
                        <Reveal class="contact-form-wrapper" variant={RevealVariant::Right}>
                            <ContactForm />
                        </Reveal>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <p>{ format!("© {} - Software Developer in Multan", BRAND) }</p>
            </footer>
        </>
    }
}
