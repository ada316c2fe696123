//! Per-node details: curated copy for well-known technology labels plus
//! a templated fallback for everything else.
//!
//! Purely presentational. Details have no bearing on graph topology or
//! layout; they exist so a details panel has something to show for any
//! node the user selects.

#[cfg(test)]
#[path = "details_test.rs"]
mod tests;

use crate::graph::NodeDetails;

/// Build the details record for a node label.
///
/// Deterministic: the same label always yields the same record. The
/// title always equals the label.
#[must_use]
pub fn for_label(label: &str) -> NodeDetails {
    let (description, content) = curated(label).unwrap_or_else(|| generic(label));
    NodeDetails {
        title: label.to_owned(),
        description,
        content,
        metadata: None,
    }
}

/// Curated copy for the well-known technology labels in the demo
/// outline. Returns `None` for any other label.
#[allow(clippy::too_many_lines)]
fn curated(label: &str) -> Option<(String, Vec<String>)> {
    let (description, bullets): (&str, [&str; 3]) = match label {
        "IT Technology" => (
            "Information Technology covers the use of computers and networks to store, retrieve, transmit, and manipulate information.",
            [
                "Spans hardware, software, and networking technology",
                "The foundation layer for digital transformation",
                "A fast-moving field that demands continuous learning",
            ],
        ),
        "Programming Languages" => (
            "Programming languages are formal languages for instructing computers. Choosing the right language for the job matters.",
            [
                "Pick the language that fits the problem domain",
                "Frontend and backend tend to use different languages",
                "New languages keep appearing as requirements shift",
            ],
        ),
        "Frontend" => (
            "Frontend technology builds the part of a web application that users directly see and interact with.",
            [
                "Used to construct the user interface",
                "Responsive design and usability are central concerns",
                "Modern frameworks raise development productivity",
            ],
        ),
        "JavaScript" => (
            "JavaScript is a general-purpose language for dynamic web pages, used on both the frontend and the backend.",
            [
                "The only language that runs natively in the browser",
                "Node.js brings it to the server side",
                "ES6 and later keep adding significant features",
            ],
        ),
        "React" => (
            "React is a JavaScript library for building user interfaces, originally developed at Facebook.",
            [
                "Component-based development encourages reuse",
                "The virtual DOM keeps updates fast",
                "A rich ecosystem and an active community",
            ],
        ),
        "Vue.js" => (
            "Vue.js is a progressive JavaScript framework for building user interfaces.",
            [
                "Gentle learning curve, friendly to newcomers",
                "Progressive design allows incremental adoption",
                "Lightweight with strong runtime performance",
            ],
        ),
        "Angular" => (
            "Angular is a TypeScript-based web application framework developed at Google.",
            [
                "TypeScript by default suits large codebases",
                "A batteries-included framework with broad scope",
                "A common choice for enterprise applications",
            ],
        ),
        "TypeScript" => (
            "TypeScript is a superset of JavaScript from Microsoft that adds static typing.",
            [
                "Adds static types on top of JavaScript",
                "Catches errors at compile time, reducing bugs",
                "Improves code quality on large projects",
            ],
        ),
        "CSS" => (
            "CSS (Cascading Style Sheets) defines the styling and layout of HTML documents.",
            [
                "Controls the look and layout of web pages",
                "Essential for responsive design",
                "CSS3 added animations and many new capabilities",
            ],
        ),
        "Backend" => (
            "Backend technology runs application logic, database access, and APIs on the server side.",
            [
                "Owns business logic and data processing",
                "Connects databases and exposes APIs",
                "Security and performance are key concerns",
            ],
        ),
        "Python" => (
            "Python is a high-level language with readable syntax, widely used for web development, data science, and AI.",
            [
                "Simple, readable syntax",
                "A deep pool of libraries and frameworks",
                "Especially popular in data science and AI",
            ],
        ),
        "Node.js" => (
            "Node.js is a JavaScript runtime built on the V8 engine that enables server-side development.",
            [
                "Server-side development in JavaScript",
                "Non-blocking I/O gives high throughput",
                "The npm ecosystem offers packages for everything",
            ],
        ),
        "Databases" => (
            "Databases store, retrieve, and manage structured information efficiently.",
            [
                "Provide persistence and efficient querying",
                "Relational, NoSQL, and graph models fit different jobs",
                "ACID properties and the CAP theorem underpin the theory",
            ],
        ),
        "Cloud Services" => (
            "Cloud services deliver computing resources over the internet.",
            [
                "Offer scalability and flexibility on demand",
                "Cut the upfront cost of IT infrastructure",
                "IaaS, PaaS, and SaaS are the main service models",
            ],
        ),
        "DevOps" => (
            "DevOps merges development and operations to streamline building, releasing, and running software.",
            [
                "Shortens release cycles through dev/ops collaboration",
                "Automation reduces human error",
                "Realized through CI/CD pipelines",
            ],
        ),
        "Security" => (
            "IT security protects systems and data from a wide range of threats.",
            [
                "Confidentiality, integrity, availability (CIA) first",
                "Defense in depth gives comprehensive protection",
                "Requires ongoing monitoring and updated defenses",
            ],
        ),
        _ => return None,
    };
    Some((
        description.to_owned(),
        bullets.iter().map(|&b| b.to_owned()).collect(),
    ))
}

/// Templated fallback for labels outside the curated table.
fn generic(label: &str) -> (String, Vec<String>) {
    (
        format!(
            "Technical notes on {label}, one of the topic areas that plays a role in the modern IT landscape."
        ),
        vec![
            format!("{label} is a significant element of modern IT"),
            "An area that rewards continuous learning and practice".to_owned(),
            "Most valuable when combined with adjacent technologies".to_owned(),
        ],
    )
}
