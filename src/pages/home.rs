use yew::prelude::*;

use crate::dom::mount::mount;

const SLIDES: [(&str, &str, &str); 3] = [
    (
        "slide-build",
        "Built Tough",
        "Commercial construction that stands up to anything.",
    ),
    (
        "slide-design",
        "Designed to Last",
        "From first sketch to final inspection, one team.",
    ),
    (
        "slide-deliver",
        "Delivered on Time",
        "Schedules we keep and budgets we respect.",
    ),
];

const STATS: [(&str, u32); 4] = [
    ("Projects Completed", 350),
    ("Happy Clients", 275),
    ("Years of Experience", 25),
    ("Awards Won", 18),
];

const SERVICES: [(&str, &str, &str); 3] = [
    (
        "design",
        "Design",
        "Architectural planning, permits and 3D walkthroughs before ground is broken.",
    ),
    (
        "build",
        "Build",
        "Licensed crews for structural, electrical and finishing work under one contract.",
    ),
    (
        "maintain",
        "Maintain",
        "Scheduled inspections and repairs that keep your building in shape for decades.",
    ),
];

const PORTFOLIO: [(&str, &str); 3] = [
    ("Riverside Offices", "Commercial"),
    ("Maple Street Lofts", "Residential"),
    ("North Yard Depot", "Industrial"),
];

const TESTIMONIALS: [(&str, &str); 2] = [
    (
        "They finished two weeks early and the site was spotless every evening.",
        "Dana R., Property Manager",
    ),
    (
        "Clear pricing, no surprises, and a crew that actually answers the phone.",
        "Miguel A., Restaurant Owner",
    ),
];

const PLANS: [(&str, &str, &str); 3] = [
    ("Consult", "$499", "Site review and written estimate"),
    ("Project", "Custom", "Full design and build contract"),
    ("Care", "$199/mo", "Quarterly inspections and priority repairs"),
];

const PAGE_CSS: &str = r#"
    .navbar {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 10;
        background: rgba(0, 0, 0, 0.9);
        transition: background 0.3s ease;
    }
    .navbar-toggler { display: none; }
    @media (max-width: 768px) {
        .navbar-toggler { display: block; }
        .navbar-collapse { display: none; }
        .navbar-collapse.show { display: block; }
    }
    .hero-slide { display: none; }
    .hero-slide.active { display: block; }
    .indicator { opacity: 0.5; cursor: pointer; }
    .indicator.active { opacity: 1; }
    .tab-pane { display: none; }
    .tab-pane.active { display: block; }
    .tab-btn.active { border-bottom: 2px solid #f5a623; }
    .fade-in {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .fade-in.visible {
        opacity: 1;
        transform: translateY(0);
    }
    .modal { display: none; }
    .modal.show { display: block; }
    .is-invalid { border-color: #dc3545; }
"#;

fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            { for SLIDES.iter().enumerate().map(|(index, (id, title, text))| html! {
                <div id={*id} class={classes!("hero-slide", (index == 0).then(|| "active"))}>
                    <h1>{*title}</h1>
                    <p>{*text}</p>
                    <button class="btn-quote" data-open-modal="quoteModal">{"Get a Quote"}</button>
                </div>
            }) }
            <div class="hero-indicators">
                { for (0..SLIDES.len()).map(|index| html! {
                    <span class={classes!("indicator", (index == 0).then(|| "active"))}></span>
                }) }
            </div>
        </section>
    }
}

fn stats() -> Html {
    html! {
        <section id="stats" class="stats-section">
            { for STATS.iter().map(|(label, target)| html! {
                <div class="stat">
                    <span class="counter" data-target={target.to_string()}>{"0"}</span>
                    <p>{*label}</p>
                </div>
            }) }
        </section>
    }
}

fn services() -> Html {
    html! {
        <section id="services" class="services">
            <h2>{"Services"}</h2>
            <div class="tab-buttons">
                { for SERVICES.iter().enumerate().map(|(index, (id, name, _))| html! {
                    <button class={classes!("tab-btn", (index == 0).then(|| "active"))} data-tab={*id}>
                        {*name}
                    </button>
                }) }
            </div>
            { for SERVICES.iter().enumerate().map(|(index, (id, _, text))| html! {
                <div id={*id} class={classes!("tab-pane", (index == 0).then(|| "active"))}>
                    <p>{*text}</p>
                </div>
            }) }
        </section>
    }
}

fn portfolio() -> Html {
    html! {
        <section id="portfolio" class="portfolio">
            <h2>{"Our Work"}</h2>
            { for PORTFOLIO.iter().map(|(title, kind)| html! {
                <div class="portfolio-item">
                    <div class="portfolio-card">
                        <div class="portfolio-overlay">
                            <h4>{*title}</h4>
                            <span>{*kind}</span>
                        </div>
                    </div>
                </div>
            }) }
        </section>
    }
}

fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="testimonials">
            { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                <blockquote class="testimonial-card">
                    <p>{*quote}</p>
                    <cite>{*author}</cite>
                </blockquote>
            }) }
        </section>
    }
}

fn pricing() -> Html {
    html! {
        <section id="pricing" class="pricing">
            { for PLANS.iter().map(|(name, price, detail)| html! {
                <div class="pricing-card">
                    <h3>{*name}</h3>
                    <p class="price">{*price}</p>
                    <p>{*detail}</p>
                    <button data-open-modal="quoteModal">{"Request"}</button>
                </div>
            }) }
        </section>
    }
}

fn quote_modal() -> Html {
    html! {
        <div id="quoteModal" class="modal">
            <div class="modal-content">
                <button type="button" class="close" data-dismiss="modal">{"×"}</button>
                <h3>{"Request a Quote"}</h3>
                <form>
                    <input type="text" name="name" placeholder="Name" required={true} />
                    <input type="email" name="email" placeholder="Email" required={true} />
                    <input type="tel" name="phone" placeholder="Phone" />
                    <select name="service" required={true}>
                        <option value="">{"Choose a service"}</option>
                        { for SERVICES.iter().map(|(id, name, _)| html! {
                            <option value={*id}>{*name}</option>
                        }) }
                    </select>
                    <textarea name="message" placeholder="Tell us about your project" required={true}></textarea>
                    <button type="submit">{"Send Request"}</button>
                </form>
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Wire the interactions once the markup below is in the DOM.
    use_effect_with_deps(
        move |_| {
            let mounted = web_sys::window().and_then(|window| {
                let document = window.document()?;
                Some(mount(&window, &document))
            });
            move || {
                if let Some(page) = mounted {
                    page.teardown();
                }
            }
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>{PAGE_CSS}</style>
            { hero() }
            { stats() }
            { services() }
            { portfolio() }
            { testimonials() }
            { pricing() }
            { quote_modal() }
        </div>
    }
}
