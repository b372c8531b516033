use kibou::{
    AutoCarousel, FlipDirection, FlipOutcome, IgnoreReason, MediaKind, PageFlipBook,
    SiteConfig, SiteContent, SiteError, SlideSet, TiltProfile, TiltSurface, TiltVector,
};
use kibou::{BookEvent, BookTiming, ContactField, ContactForm, LinkOpener};
use anyhow::Result;
use egui::{Pos2, Rect};
use std::env;
use std::fs;

#[derive(Default)]
struct RecordingOpener {
    opened: Vec<String>,
}

impl LinkOpener for RecordingOpener {
    fn open_in_new_tab(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}

fn pages(n: usize) -> SlideSet<usize> {
    SlideSet::new((0..n).collect()).unwrap()
}

fn book(n: usize) -> PageFlipBook<usize> {
    PageFlipBook::new(pages(n), BookTiming::default(), 0.0)
}

#[test]
fn test_carousel_go_to_and_wrap() {
    let mut carousel = AutoCarousel::new(pages(3), 5.0, 0.0);

    carousel.go_to(2, 1.0);
    assert_eq!(carousel.current_index(), 2);

    // next() from the last slide wraps to the first
    carousel.next(1.5);
    assert_eq!(carousel.current_index(), 0);

    // prev() from the first slide wraps to the last
    carousel.prev(2.0);
    assert_eq!(carousel.current_index(), 2);

    // go_to(current) changes nothing
    carousel.go_to(2, 2.5);
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn test_carousel_hover_suspends_autoplay() {
    let mut carousel = AutoCarousel::new(pages(3), 5.0, 0.0);

    carousel.hover_enter();
    assert!(!carousel.is_autoplay_enabled());

    // Time passes while hovered; repeated ticks never advance
    for step in 1..=20 {
        assert!(!carousel.tick(step as f64));
    }
    assert_eq!(carousel.current_index(), 0);

    // Leaving re-arms from the leave instant
    carousel.hover_leave(20.0);
    assert!(carousel.is_autoplay_enabled());
    assert!(!carousel.tick(24.9));
    assert!(carousel.tick(25.0));
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_manual_navigation_restarts_autoplay_period() {
    let mut carousel = AutoCarousel::new(pages(4), 5.0, 0.0);

    carousel.next(4.0);
    assert_eq!(carousel.current_index(), 1);

    // The original 5 s deadline no longer applies
    assert!(!carousel.tick(5.0));
    assert!(carousel.tick(9.0));
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn test_flip_requests_ignored_while_busy() {
    let mut book = book(4);

    let first = book.next(0.0);
    assert_eq!(
        first,
        FlipOutcome::Started {
            target: 1,
            direction: FlipDirection::Next
        }
    );

    // Two more requests inside the flip window are rejected
    assert_eq!(book.next(0.2), FlipOutcome::Ignored(IgnoreReason::Busy));
    assert_eq!(book.go_to(3, 0.4), FlipOutcome::Ignored(IgnoreReason::Busy));

    book.tick(0.8);
    assert_eq!(book.current_index(), 1);
    assert!(!book.is_flipping());
}

#[test]
fn test_flip_commits_exactly_at_duration() {
    let mut book = book(4);
    book.go_to(2, 1.0);

    assert_eq!(book.tick(1.79), None);
    assert_eq!(book.current_index(), 0);
    assert_eq!(book.incoming_page(), Some(&2));

    assert_eq!(book.tick(1.8), Some(BookEvent::Committed { page: 2 }));
    assert_eq!(book.current_index(), 2);
    assert_eq!(book.incoming_page(), None);
}

#[test]
fn test_go_to_current_page_stays_idle() {
    let mut book = book(3);
    assert_eq!(
        book.go_to(0, 0.0),
        FlipOutcome::Ignored(IgnoreReason::AlreadyShowing)
    );
    assert!(!book.is_flipping());
}

#[test]
fn test_go_to_picks_direction_from_target() {
    let mut book = book(4);
    book.go_to(3, 0.0);
    assert_eq!(book.direction(), FlipDirection::Next);
    book.tick(0.8);

    book.go_to(1, 1.0);
    assert_eq!(book.direction(), FlipDirection::Prev);
}

#[test]
fn test_book_autoplay_waits_for_cooldown() {
    let mut book = book(3);

    // Autoplay armed at construction fires after 4 s
    assert_eq!(
        book.tick(4.0),
        Some(BookEvent::Autoplayed(FlipOutcome::Started {
            target: 1,
            direction: FlipDirection::Next
        }))
    );
    assert_eq!(book.tick(4.8), Some(BookEvent::Committed { page: 1 }));
    assert!(book.is_cooling_down());

    // Cool-down ends 3 s after commit, autoplay re-arms from there
    assert_eq!(book.tick(7.8), None);
    assert!(!book.is_cooling_down());
    assert_eq!(book.tick(11.7), None);
    assert!(matches!(book.tick(11.9), Some(BookEvent::Autoplayed(_))));
}

#[test]
fn test_book_hover_blocks_autoplay() {
    let mut book = book(3);
    book.hover_enter();

    for step in 1..=40 {
        assert_eq!(book.tick(step as f64 * 0.5), None);
    }
    assert_eq!(book.current_index(), 0);
}

#[test]
fn test_tilt_center_is_identity_and_reset_settles() {
    let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), egui::vec2(300.0, 200.0));
    let mut surface = TiltSurface::new(TiltProfile::CONTACT_CARD);

    surface.pointer_moved(rect, rect.center());
    assert_eq!(surface.orientation(0.0), TiltVector::IDENTITY);

    surface.pointer_moved(rect, rect.right_top());
    let tilted = surface.orientation(0.0);
    assert_eq!(tilted.rotate_x, 15.0);
    assert_eq!(tilted.rotate_y, 15.0);

    surface.pointer_left(1.0);
    let midway = surface.orientation(1.25);
    assert!(midway.rotate_y > 0.0 && midway.rotate_y < 15.0);

    surface.tick(1.5);
    assert_eq!(surface.orientation(1.5), TiltVector::IDENTITY);
}

#[test]
fn test_bento_tilt_resets_instantly() {
    let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(100.0, 100.0));
    let mut surface = TiltSurface::new(TiltProfile::BENTO);

    surface.pointer_moved(rect, Pos2::new(100.0, 100.0));
    assert_eq!(surface.scale(), 0.95);

    surface.pointer_left(3.0);
    assert_eq!(surface.orientation(3.0), TiltVector::IDENTITY);
    assert_eq!(surface.scale(), 1.0);
}

#[test]
fn test_contact_form_missing_name_fails_without_navigation() {
    let mut form = ContactForm::new();
    form.email = "budi@example.com".to_string();
    form.pesan = "Saya ingin mendaftar".to_string();

    let mut opener = RecordingOpener::default();
    let err = form.submit("6281325835578", &mut opener).unwrap_err();

    match err {
        SiteError::IncompleteContactForm { missing } => {
            assert_eq!(missing, vec![ContactField::Nama]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(opener.opened.is_empty());
    assert_eq!(form.email, "budi@example.com");
}

#[test]
fn test_contact_form_success_opens_link_once_and_clears() {
    let mut form = ContactForm::new();
    form.nama = "Budi Santoso".to_string();
    form.email = "budi@example.com".to_string();
    form.alamat = "Jl. Merdeka 1, Semarang".to_string();
    form.pesan = "Info program magang & jadwal?".to_string();

    let mut opener = RecordingOpener::default();
    let url = form.submit("6281325835578", &mut opener).unwrap();

    assert_eq!(opener.opened, vec![url.clone()]);
    assert!(url.starts_with("https://wa.me/6281325835578?text="));
    for value in [
        "Budi Santoso",
        "budi@example.com",
        "Jl. Merdeka 1, Semarang",
        "Info program magang & jadwal?",
    ] {
        let encoded = urlencoding::encode(value);
        assert!(url.contains(encoded.as_ref()), "missing {value}");
    }

    assert!(form.nama.is_empty());
    assert!(form.email.is_empty());
    assert!(form.alamat.is_empty());
    assert!(form.pesan.is_empty());
}

#[test]
fn test_contact_message_without_address_uses_fallback() {
    let mut form = ContactForm::new();
    form.nama = "Sari".to_string();
    form.email = "sari@example.com".to_string();
    form.pesan = "Halo".to_string();

    assert!(form.compose_message().contains("Tidak diisi"));

    let url = form.outbound_url("6281325835578");
    assert!(url.contains(urlencoding::encode("Tidak diisi").as_ref()));
}

#[test]
fn test_media_resolution_by_extension() {
    assert_eq!(MediaKind::from_path("img/galeri-1.jpeg"), MediaKind::Image);
    assert_eq!(MediaKind::from_path("video/hero.MP4"), MediaKind::Video);
    assert_eq!(MediaKind::from_path("docs/brosur.pdf"), MediaKind::Unsupported);
    assert_eq!(MediaKind::from_path("README"), MediaKind::Unsupported);
}

#[test]
fn test_empty_slide_set_is_rejected() {
    let err = SlideSet::<usize>::new(Vec::new()).unwrap_err();
    assert!(matches!(err, SiteError::EmptySlideSet));

    let content = SiteContent {
        story_pages: Vec::new(),
        ..SiteContent::default()
    };
    assert!(content.story_slides().is_err());
}

#[test]
fn test_config_file_overrides_defaults() -> Result<()> {
    let path = env::temp_dir().join("kibou_integration_config.json");

    // Only part of the config is given; the rest keeps its defaults
    fs::write(
        &path,
        r#"{ "timing": { "flip_duration": 1.2 }, "contact": { "whatsapp_number": "628111" } }"#,
    )?;

    let config = SiteConfig::load(&path)?;
    assert_eq!(config.timing.flip_duration, 1.2);
    assert_eq!(config.timing.carousel_autoplay, 5.0);
    assert_eq!(config.contact.whatsapp_number, "628111");
    assert_eq!(config.snowfall.flake_count, 50);

    // Clean up
    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_content_file_round_trip() -> Result<()> {
    let path = env::temp_dir().join("kibou_integration_content.json");

    let content = SiteContent::default();
    fs::write(&path, serde_json::to_string_pretty(&content)?)?;

    let loaded = SiteContent::load(&path)?;
    assert_eq!(loaded.programs.len(), content.programs.len());
    assert_eq!(loaded.story_title.plain_text(), "Materi Pembelajaran");
    assert_eq!(loaded.story_pages[0].title, content.story_pages[0].title);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_snowfall_steps_on_period_and_stays_in_bounds() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(7);
    let mut snow = kibou::Snowfall::new(&mut rng, 50, 0.03, 0.0);
    assert_eq!(snow.flakes().len(), 50);

    let before = snow.flakes().to_vec();
    assert!(!snow.tick(0.01));
    assert_eq!(snow.flakes(), before.as_slice());

    // Run long enough for every flake to leave and re-enter the view
    let mut now = 0.0;
    for _ in 0..2000 {
        now += 0.05;
        snow.tick(now);
        for flake in snow.flakes() {
            assert!(flake.x >= -5.0 && flake.x <= 105.0 + 3.0 * 0.9);
            assert!(flake.y >= -100.0 && flake.y <= 110.0 + 3.0 * 1.2);
        }
    }
}

#[test]
fn test_spotlight_follows_pointer_inside_badge() {
    let badge = Rect::from_min_size(Pos2::new(40.0, 300.0), egui::vec2(190.0, 36.0));
    let mut spotlight = kibou::Spotlight::new();
    assert_eq!(spotlight.opacity(), 0.0);

    spotlight.pointer_entered();
    spotlight.pointer_moved(badge, Pos2::new(100.0, 310.0));
    assert_eq!(spotlight.opacity(), 1.0);
    assert_eq!(spotlight.cursor(), egui::vec2(60.0, 10.0));

    spotlight.pointer_left();
    assert_eq!(spotlight.opacity(), 0.0);
}

#[test]
fn test_section_body_accepts_string_or_list() -> Result<()> {
    let paragraph: kibou::SectionBody = serde_json::from_str(r#""Belajar bahasa Jepang""#)?;
    assert_eq!(
        paragraph,
        kibou::SectionBody::Paragraph("Belajar bahasa Jepang".to_string())
    );

    let list: kibou::SectionBody = serde_json::from_str(r#"["Kaigo", "Pertanian"]"#)?;
    assert_eq!(
        list,
        kibou::SectionBody::BulletList(vec!["Kaigo".to_string(), "Pertanian".to_string()])
    );
    Ok(())
}

#[test]
fn test_out_of_range_timings_are_clamped_on_load() -> Result<()> {
    let path = env::temp_dir().join("kibou_integration_huge_timings.json");
    fs::write(
        &path,
        r#"{ "timing": { "carousel_autoplay": 1e300, "flip_autoplay": 1e300, "snowfall_step": 1e300 } }"#,
    )?;

    let config = SiteConfig::load(&path)?;
    assert_eq!(config.timing.carousel_autoplay, kibou::config::MAX_SECONDS);
    assert_eq!(config.timing.flip_autoplay, kibou::config::MAX_SECONDS);
    assert_eq!(config.timing.snowfall_step, kibou::config::MAX_SECONDS);

    // Every deadline derived from the clamped values is a valid Duration
    let mut carousel = AutoCarousel::new(pages(3), config.timing.carousel_autoplay, 10.0);
    let due = carousel.next_wakeup().unwrap();
    assert!(std::time::Duration::try_from_secs_f64(due - 10.0).is_ok());
    assert!(!carousel.tick(10.0 + 3599.0));

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_go_to_huge_index_wraps_modulo_len() {
    let mut book = book(4);
    // usize::MAX % 4 == 3
    assert_eq!(
        book.go_to(usize::MAX, 0.0),
        FlipOutcome::Started {
            target: 3,
            direction: FlipDirection::Next
        }
    );
}
