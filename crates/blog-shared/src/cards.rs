//! Post summaries for the listing view, with the static fixture list the
//! web app currently renders. Wiring the view to the live API is a
//! follow-on task.

use serde::{Deserialize, Serialize};

/// A post summary as shown on a listing card. The `image` URL exists only
/// here; the backend schema does not persist it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCard {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// The hardcoded summaries the listing page renders.
pub fn fixture_cards() -> Vec<PostCard> {
    vec![
        PostCard {
            id: 1,
            title: "Deploying Next.js with Docker & Jenkins".to_string(),
            description: "A full guide to set up CI/CD with Jenkins and Docker.".to_string(),
            image: "https://source.unsplash.com/random/400x300?tech".to_string(),
        },
        PostCard {
            id: 2,
            title: "Understanding React Server Components".to_string(),
            description: "How Server Components change how we build apps.".to_string(),
            image: "https://source.unsplash.com/random/400x300?react".to_string(),
        },
        PostCard {
            id: 3,
            title: "Styling with Tailwind CSS".to_string(),
            description: "Fast and consistent design using utility classes.".to_string(),
            image: "https://source.unsplash.com/random/400x300?tailwind".to_string(),
        },
    ]
}
