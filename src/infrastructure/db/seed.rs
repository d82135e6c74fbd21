use crate::entities::project::{NewProject, TechStack};

/// Entries written into an empty `projects` table on first start.
pub fn sample_projects() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "Campus BookShare".into(),
            description: "A comprehensive web platform enabling students to share, borrow, and lend \
                textbooks across campus. Features user authentication, real-time messaging, and an \
                intuitive interface for managing book transactions."
                .into(),
            image_path: "images/friends.jpg".into(),
            project_type: "Full-Stack Application".into(),
            year: 2024,
            status: "Completed".into(),
            tech_stack: TechStack::Joined("Flask,SQLite,JavaScript,CSS3,HTML5".into()),
            github_url: Some("https://github.com/Laufterbeast/FinalLauf.git".into()),
            live_url: None,
            featured: true,
        },
        NewProject {
            title: "Personal Website v2".into(),
            description: "A modern, responsive portfolio website showcasing clean design principles \
                and interactive elements. Demonstrates proficiency in front-end development and user \
                experience design."
                .into(),
            image_path: "images/friends_skyline.jpeg.jpeg".into(),
            project_type: "Portfolio Website".into(),
            year: 2023,
            status: "Completed".into(),
            tech_stack: TechStack::Joined("HTML5,CSS3,JavaScript".into()),
            github_url: Some("https://github.com/Laufterbeast/Personalwebv2.git".into()),
            live_url: None,
            featured: false,
        },
        NewProject {
            title: "Personal Website v1".into(),
            description: "The foundation of my web development journey, later refactored into this \
                current site. Focused on accessibility, semantic HTML, and clean code architecture."
                .into(),
            image_path: "images/shellcoolcar.jpg".into(),
            project_type: "Portfolio Website".into(),
            year: 2023,
            status: "Refactored".into(),
            tech_stack: TechStack::Joined("HTML5,CSS3,Accessibility".into()),
            github_url: None,
            live_url: None,
            featured: false,
        },
    ]
}
