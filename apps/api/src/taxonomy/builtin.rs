use super::SkillCategory;

pub(super) const BUILTIN_SKILLS: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Programming,
        &[
            "python",
            "javascript",
            "java",
            "c++",
            "c#",
            "ruby",
            "go",
            "rust",
            "php",
            "swift",
            "kotlin",
            "typescript",
            "scala",
        ],
    ),
    (
        SkillCategory::Web,
        &[
            "react", "angular", "vue", "nodejs", "express", "django", "flask", "fastapi",
            "nextjs", "nuxtjs", "svelte",
        ],
    ),
    (
        SkillCategory::Mobile,
        &["react native", "flutter", "ios", "android", "xamarin", "ionic"],
    ),
    (
        SkillCategory::Database,
        &[
            "mongodb",
            "postgresql",
            "mysql",
            "redis",
            "elasticsearch",
            "cassandra",
            "dynamodb",
            "sqlite",
        ],
    ),
    (
        SkillCategory::Cloud,
        &[
            "aws",
            "azure",
            "gcp",
            "heroku",
            "digitalocean",
            "kubernetes",
            "docker",
            "terraform",
        ],
    ),
    (
        SkillCategory::MlAi,
        &[
            "tensorflow",
            "pytorch",
            "keras",
            "scikit-learn",
            "opencv",
            "nlp",
            "machine learning",
            "deep learning",
            "ai",
        ],
    ),
    (
        SkillCategory::Tools,
        &[
            "git",
            "github",
            "gitlab",
            "jenkins",
            "circleci",
            "travis",
            "jira",
            "confluence",
        ],
    ),
    (
        SkillCategory::Other,
        &[
            "rest api",
            "graphql",
            "websockets",
            "microservices",
            "agile",
            "scrum",
            "devops",
            "ci/cd",
        ],
    ),
];
