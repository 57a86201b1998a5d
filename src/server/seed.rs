//! Demo-data bootstrap for development and demo environments.
//!
//! Invoked with `hungyeu seed`. Every write is an upsert keyed on the
//! natural identifier (email, category name, page slug, story slug), so
//! running the seeder twice leaves the database unchanged.
//!
//! Demo credentials are fixed and logged on completion; never run this
//! against a production database.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        category::CategoryRepository, chapter::ChapterRepository, page::PageRepository,
        story::StoryRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        category::CreateCategoryParams,
        chapter::CreateChapterParams,
        page::CreatePageParams,
        story::CreateStoryParams,
        user::CreateUserParams,
    },
    service::auth::hash_password,
    util::{slug::slugify, text},
};

struct DemoAccount {
    email: &'static str,
    username: &'static str,
    password: &'static str,
    display_name: &'static str,
    role: entity::user::UserRole,
}

const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        email: "admin@hungyeu.local",
        username: "admin",
        password: "admin12345",
        display_name: "Quản trị viên",
        role: entity::user::UserRole::Admin,
    },
    DemoAccount {
        email: "author@hungyeu.local",
        username: "tacgia",
        password: "author12345",
        display_name: "Tác Giả Demo",
        role: entity::user::UserRole::Author,
    },
    DemoAccount {
        email: "user1@hungyeu.local",
        username: "docgia1",
        password: "user12345",
        display_name: "Độc Giả 1",
        role: entity::user::UserRole::User,
    },
    DemoAccount {
        email: "user2@hungyeu.local",
        username: "docgia2",
        password: "user12345",
        display_name: "Độc Giả 2",
        role: entity::user::UserRole::User,
    },
    DemoAccount {
        email: "user3@hungyeu.local",
        username: "docgia3",
        password: "user12345",
        display_name: "Độc Giả 3",
        role: entity::user::UserRole::User,
    },
];

const CATEGORIES: &[(&str, &str)] = &[
    ("Tiên Hiệp", "Tu luyện, phi thăng, thế giới tiên ma"),
    ("Kiếm Hiệp", "Giang hồ, ân oán, võ công tuyệt học"),
    ("Ngôn Tình", "Chuyện tình lãng mạn hiện đại và cổ đại"),
    ("Đô Thị", "Cuộc sống thành thị đương đại"),
    ("Huyền Huyễn", "Thế giới huyền ảo, sức mạnh siêu nhiên"),
    ("Trinh Thám", "Phá án, suy luận, bí ẩn"),
    ("Lịch Sử", "Dã sử, xuyên không về quá khứ"),
    ("Khoa Huyễn", "Khoa học viễn tưởng, tương lai"),
];

const PAGES: &[(&str, &str)] = &[
    ("Giới thiệu", "HÙNG YÊU là nền tảng đọc truyện trực tuyến miễn phí."),
    ("Liên hệ", "Mọi thắc mắc xin gửi về hộp thư hỗ trợ của chúng tôi."),
    ("Bản quyền", "Nội dung đăng tải thuộc về tác giả và nền tảng."),
    ("Điều khoản sử dụng", "Quy định khi sử dụng dịch vụ."),
    ("Chính sách riêng tư", "Cách chúng tôi thu thập và xử lý dữ liệu."),
    ("Hướng dẫn đăng truyện", "Các bước để trở thành tác giả và đăng truyện."),
    ("Quy định nội dung", "Nội dung bị cấm và tiêu chuẩn kiểm duyệt."),
    ("Câu hỏi thường gặp", "Giải đáp các thắc mắc phổ biến."),
];

struct DemoStory {
    title: &'static str,
    description: &'static str,
    categories: &'static [&'static str],
}

const STORIES: &[DemoStory] = &[
    DemoStory {
        title: "Kiếm Động Cửu Thiên",
        description: "Một thiếu niên mang kiếm cổ, bước lên con đường nghịch thiên.",
        categories: &["Tiên Hiệp", "Kiếm Hiệp"],
    },
    DemoStory {
        title: "Phố Nhỏ Có Mưa",
        description: "Chuyện tình chậm rãi nơi con phố cũ của Hà Nội.",
        categories: &["Ngôn Tình", "Đô Thị"],
    },
    DemoStory {
        title: "Hồ Sơ Án Đêm",
        description: "Những vụ án chỉ mở ra sau nửa đêm.",
        categories: &["Trinh Thám"],
    },
];

const CHAPTERS_PER_STORY: usize = 5;

/// Seeds demo accounts, categories, stories with chapters, and static
/// pages. Idempotent: rerunning refreshes instead of duplicating.
pub async fn run(db: &DatabaseConnection) -> Result<(), AppError> {
    let users = UserRepository::new(db);
    let categories = CategoryRepository::new(db);
    let stories = StoryRepository::new(db);
    let chapters = ChapterRepository::new(db);
    let pages = PageRepository::new(db);

    // Accounts
    let mut author_id = None;
    let mut author_name = String::new();

    for account in DEMO_ACCOUNTS {
        let entity = match users.find_entity_by_email(account.email).await? {
            Some(existing) => existing,
            None => {
                users
                    .create(CreateUserParams {
                        email: account.email.to_string(),
                        username: account.username.to_string(),
                        password_hash: hash_password(account.password)?,
                        display_name: Some(account.display_name.to_string()),
                        role: account.role.clone(),
                        email_verified: true,
                        verification_token: None,
                    })
                    .await?
            }
        };

        if entity.role == entity::user::UserRole::Author {
            author_id = Some(entity.id);
            author_name = entity
                .display_name
                .clone()
                .unwrap_or_else(|| entity.username.clone());
        }
    }

    let author_id =
        author_id.ok_or_else(|| AppError::InternalError("Seed author missing".to_string()))?;

    // Categories
    let mut category_ids = std::collections::HashMap::new();
    for (name, description) in CATEGORIES {
        let category = categories
            .upsert_by_name(CreateCategoryParams {
                name: name.to_string(),
                slug: slugify(name),
                description: Some(description.to_string()),
            })
            .await?;
        category_ids.insert(*name, category.id);
    }

    // Stories with chapters
    for demo in STORIES {
        let slug = slugify(demo.title);
        if stories.slug_exists(&slug).await? {
            continue;
        }

        let story = stories
            .create(CreateStoryParams {
                author_id,
                author_name: author_name.clone(),
                title: demo.title.to_string(),
                slug: slug.clone(),
                description: Some(demo.description.to_string()),
                cover_image: None,
                tags: None,
                country: Some("Việt Nam".to_string()),
                category_ids: demo
                    .categories
                    .iter()
                    .filter_map(|name| category_ids.get(name).copied())
                    .collect(),
            })
            .await?;

        stories
            .set_published(story.id, true, entity::story::StoryStatus::Ongoing)
            .await?;

        for n in 1..=CHAPTERS_PER_STORY {
            let title = format!("Chương {}", n);
            let content = format!(
                "<p>Nội dung minh họa cho {} của truyện {}.</p>\
                 <p>Đoạn văn thứ hai để chương có độ dài hợp lý hơn.</p>",
                title, demo.title
            );
            let word_count = text::word_count(&content);

            chapters
                .create(CreateChapterParams {
                    story_id: story.id,
                    uploader_id: author_id,
                    title: title.clone(),
                    slug: slugify(&title),
                    content,
                    sort_order: n as i32,
                    word_count,
                    reading_time: text::reading_time(word_count),
                    is_published: true,
                })
                .await?;
        }
    }

    // Static pages
    for (title, content) in PAGES {
        pages
            .upsert_by_slug(CreatePageParams {
                slug: slugify(title),
                title: title.to_string(),
                description: None,
                content: format!("<p>{}</p>", content),
                is_active: true,
            })
            .await?;
    }

    tracing::info!(
        "Seed complete: {} categories, {} stories, {} pages.",
        categories.count().await?,
        STORIES.len(),
        PAGES.len()
    );
    tracing::info!("Demo accounts:");
    for account in DEMO_ACCOUNTS {
        tracing::info!("  {} / {}", account.email, account.password);
    }

    Ok(())
}
