use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <section class="page-hero">
            <div class="container">
                <h1>{&props.title}</h1>
                {if let Some(subtitle) = &props.subtitle {
                    html! { <p class="page-subtitle">{subtitle}</p> }
                } else {
                    html! {}
                }}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentSectionProps {
    pub heading: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ContentSection)]
pub fn content_section(props: &ContentSectionProps) -> Html {
    html! {
        <section class="content-section">
            <div class="container">
                <h2>{&props.heading}</h2>
                {props.children.clone()}
            </div>
        </section>
    }
}

/// A titled card in a feature grid
#[derive(Clone, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FeatureGridProps {
    pub features: Vec<Feature>,
}

#[function_component(FeatureGrid)]
pub fn feature_grid(props: &FeatureGridProps) -> Html {
    html! {
        <div class="feature-grid">
            {for props.features.iter().map(|feature| html! {
                <div class="feature-card" key={feature.title}>
                    <h3>{feature.title}</h3>
                    <p>{feature.body}</p>
                </div>
            })}
        </div>
    }
}
