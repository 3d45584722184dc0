//! Static content sections of the page.

use leptos::prelude::*;

use crate::config::{AUTHOR, TAGLINE};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

/// `(name, description)` pairs for the skills grid.
const SKILLS: &[(&str, &str)] = &[
    ("Front-end", "HTML, CSS, JavaScript, TypeScript e React"),
    ("Back-end", "Node.js, Python e bancos de dados relacionais"),
    ("Rust & WebAssembly", "Aplicações rápidas e seguras no navegador"),
    ("UI/UX", "Interfaces responsivas e acessíveis"),
];

/// `(title, description)` pairs for the portfolio grid.
const PROJECTS: &[(&str, &str)] = &[
    ("Portfólio Pessoal", "Este site, escrito em Rust com Leptos."),
    ("Landing Page", "Página de captação com formulário integrado."),
    ("Dashboard", "Painel administrativo com gráficos em tempo real."),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header id="home" class=css::hero>
            <h1 class=css::heroTitle>{AUTHOR}</h1>
            <p class=css::tagline>{TAGLINE}</p>
            <a
                href="#contact"
                class=css::cta
                on:click=move |ev| {
                    if dom::scroll_to_anchor("#contact") {
                        ev.prevent_default();
                    }
                }
            >
                "Fale comigo"
            </a>
        </header>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class=css::section>
            <h2 class=css::title>"Sobre mim"</h2>
            <p class=css::text>
                "Desenvolvedor apaixonado por criar experiências web rápidas, acessíveis e bem cuidadas."
            </p>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class=css::section>
            <h2 class=css::title>"Habilidades"</h2>
            <div class=css::grid>
                {SKILLS.iter().map(|&(name, description)| view! {
                    <article class=css::card>
                        <h3>{name}</h3>
                        <p>{description}</p>
                    </article>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="portfolio" class=css::section>
            <h2 class=css::title>"Portfólio"</h2>
            <div class=css::grid>
                {PROJECTS.iter().map(|&(title, description)| view! {
                    <article class=css::card>
                        <h3>{title}</h3>
                        <p>{description}</p>
                    </article>
                }).collect_view()}
            </div>
        </section>
    }
}
