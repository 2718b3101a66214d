//! Built-in skill catalog.
//!
//! Rows are `(name, category, icon slug, brand color)`, in shelf order.
//! Duplicate slugs are intentional data: "Matplotlib" reuses the "pandas"
//! icon.

use crate::types::RawSkillRecord;

const CATALOG: &[(&str, &str, &str, &str)] = &[
    ("Unreal Engine", "Other Skills", "unrealengine", "#000000"),
    ("Arduino", "Other Skills", "arduino", "#00979D"),
    ("C", "Coding Languages", "c", "#A8B9CC"),
    ("C#", "Coding Languages", "csharp", "#239120"),
    ("C++", "Coding Languages", "cplusplus", "#00599C"),
    ("CSS3", "Frontend", "css3", "#1572B6"),
    ("HTML5", "Frontend", "html5", "#E34F26"),
    ("JavaScript", "Coding Languages", "javascript", "#F7DF1E"),
    ("PHP", "Coding Languages", "php", "#777BB4"),
    ("Python", "Coding Languages", "python", "#3776AB"),
    ("PowerShell", "Coding Languages", "powershell", "#5391FE"),
    ("R", "Coding Languages", "r", "#276DC3"),
    ("TypeScript", "Coding Languages", "typescript", "#3178C6"),
    ("Netlify", "Other Skills", "netlify", "#00C7B7"),
    ("Vercel", "Other Skills", "vercel", "#000000"),
    ("Render", "Other Skills", "render", "#000000"),
    ("AWS", "Other Skills", "amazonaws", "#232F3E"),
    (".Net", "Other Skills", "dotnet", "#512BD4"),
    ("Chart.js", "Frontend", "chartdotjs", "#FF6384"),
    ("Chakra", "Frontend", "chakraui", "#319795"),
    ("Bootstrap", "Frontend", "bootstrap", "#7952B3"),
    ("DaisyUI", "Frontend", "daisyui", "#5A0EF8"),
    ("Django", "Backend", "django", "#092E20"),
    ("Express.js", "Backend", "express", "#000000"),
    ("FastAPI", "Backend", "fastapi", "#009688"),
    ("Fastify", "Backend", "fastify", "#000000"),
    ("Flask", "Backend", "flask", "#000000"),
    ("jQuery", "Frontend", "jquery", "#0769AD"),
    ("JWT", "Backend", "jsonwebtokens", "#000000"),
    ("Next JS", "Frontend", "nextdotjs", "#000000"),
    ("NodeJS", "Backend", "nodedotjs", "#339933"),
    ("Nodemon", "Backend", "nodemon", "#76D04B"),
    ("OpenCV", "Other Skills", "opencv", "#5C3EE8"),
    ("React Query", "Frontend", "reactquery", "#FF4154"),
    ("React Native", "Frontend", "react", "#61DAFB"),
    ("React Router", "Frontend", "reactrouter", "#CA4245"),
    ("React Hook Form", "Frontend", "reacthookform", "#EC5990"),
    ("Redux", "Frontend", "redux", "#764ABC"),
    ("TailwindCSS", "Frontend", "tailwindcss", "#06B6D4"),
    ("Three js", "Frontend", "threedotjs", "#000000"),
    ("WordPress", "Other Skills", "wordpress", "#21759B"),
    ("Vite", "Frontend", "vite", "#646CFF"),
    ("Apache", "Backend", "apache", "#D22128"),
    ("MicrosoftSQLServer", "Backend", "microsoftsqlserver", "#CC292B"),
    ("MongoDB", "Backend", "mongodb", "#47A248"),
    ("MySQL", "Backend", "mysql", "#4479A1"),
    ("Postgres", "Backend", "postgresql", "#4169E1"),
    ("SQLite", "Backend", "sqlite", "#003B57"),
    ("Adobe", "Other Skills", "adobe", "#FF0000"),
    ("Adobe Illustrator", "Other Skills", "adobeillustrator", "#FF9A00"),
    ("Adobe Photoshop", "Other Skills", "adobephotoshop", "#31A8FF"),
    ("Blender", "Other Skills", "blender", "#F5792A"),
    ("Canva", "Other Skills", "canva", "#00C4CC"),
    ("Figma", "Other Skills", "figma", "#F24E1E"),
    ("Sketch Up", "Other Skills", "sketch", "#F7B500"),
    ("Matplotlib", "Other Skills", "pandas", "#11557c"),
    ("NumPy", "Other Skills", "numpy", "#013243"),
    ("Pandas", "Other Skills", "pandas", "#150458"),
    ("Plotly", "Other Skills", "plotly", "#3F4F75"),
    ("scikit-learn", "Other Skills", "scikitlearn", "#F7931E"),
    ("Scipy", "Other Skills", "scipy", "#8CAAEE"),
    ("TensorFlow", "Other Skills", "tensorflow", "#FF6F00"),
    ("Git", "Other Skills", "git", "#F05032"),
    ("GitHub", "Other Skills", "github", "#181717"),
    ("Jira", "Other Skills", "jira", "#0052CC"),
    ("Unity", "Other Skills", "unity", "#000000"),
];

/// Returns the built-in catalog as owned records, in declaration order.
///
/// # Examples
///
/// ```
/// use skills_core::catalog::builtin;
///
/// let skills = builtin();
/// assert_eq!(skills.first().map(|s| s.name.as_str()), Some("Unreal Engine"));
/// assert_eq!(skills.last().map(|s| s.name.as_str()), Some("Unity"));
/// ```
#[must_use]
pub fn builtin() -> Vec<RawSkillRecord> {
    CATALOG
        .iter()
        .map(|&(name, category, slug, color)| RawSkillRecord::new(name, category, slug, color))
        .collect()
}
