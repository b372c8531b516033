//! Site content model.
//!
//! All copy shown by the site is data: the built-in [`SiteContent::default`]
//! carries the institute's text and a JSON file with the same shape can
//! replace it at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::markup::StyledTitle;

/// Ordered, non-empty sequence of slides with wrapping index arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSet<T> {
    slides: Vec<T>,
}

impl<T> SlideSet<T> {
    /// Builds a slide set, rejecting an empty list.
    pub fn new(slides: Vec<T>) -> Result<Self> {
        if slides.is_empty() {
            return Err(SiteError::EmptySlideSet);
        }
        Ok(Self { slides })
    }

    /// Number of slides, always at least one.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn get(&self, index: usize) -> &T {
        &self.slides[self.wrap_index(index)]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slides.iter()
    }

    /// Maps any signed offset into `[0, len)`.
    pub fn wrap(&self, index: isize) -> usize {
        index.rem_euclid(self.slides.len() as isize) as usize
    }

    /// Maps any index into `[0, len)`.
    pub fn wrap_index(&self, index: usize) -> usize {
        index % self.slides.len()
    }

    pub fn next_index(&self, index: usize) -> usize {
        (self.wrap_index(index) + 1) % self.slides.len()
    }

    pub fn prev_index(&self, index: usize) -> usize {
        let len = self.slides.len();
        (self.wrap_index(index) + len - 1) % len
    }
}

/// Body of a program card section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionBody {
    Paragraph(String),
    BulletList(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramSection {
    #[serde(default)]
    pub subtitle: Option<String>,
    pub body: SectionBody,
}

/// One slide of the program carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramSlide {
    pub title: StyledTitle,
    pub sections: Vec<ProgramSection>,
}

/// One page of the learning-material book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryPage {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl StoryPage {
    /// At most three feature bullets fit on a page.
    pub fn visible_features(&self) -> &[String] {
        &self.features[..self.features.len().min(3)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub src: String,
    #[serde(default)]
    pub title: Option<StyledTitle>,
    #[serde(default)]
    pub description: Option<String>,
    /// Shows the hover-spotlight badge.
    #[serde(default)]
    pub badge: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactCard {
    pub icon: String,
    pub title: String,
    pub value: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub title: StyledTitle,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub heading: String,
    pub summary: String,
    pub vision: String,
    pub missions: Vec<String>,
}

/// Everything the landing page displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: String,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub programs_heading: String,
    pub programs: Vec<ProgramSlide>,
    pub story_title: StyledTitle,
    pub story_pages: Vec<StoryPage>,
    pub gallery_heading: String,
    pub gallery: Vec<GalleryItem>,
    pub contact_heading: String,
    pub contact_cards: Vec<ContactCard>,
}

impl SiteContent {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let content = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), programs = content.programs.len(), "loaded site content");
        Ok(content)
    }

    pub fn program_slides(&self) -> Result<SlideSet<ProgramSlide>> {
        SlideSet::new(self.programs.clone())
    }

    pub fn story_slides(&self) -> Result<SlideSet<StoryPage>> {
        SlideSet::new(self.story_pages.clone())
    }
}

fn bullets(items: &[&str]) -> SectionBody {
    SectionBody::BulletList(items.iter().map(|s| s.to_string()).collect())
}

fn section(subtitle: &str, body: SectionBody) -> ProgramSection {
    ProgramSection {
        subtitle: Some(subtitle.to_string()),
        body,
    }
}

fn story_page(title: &str, icon: &str, description: &str, features: [&str; 3]) -> StoryPage {
    StoryPage {
        title: title.to_string(),
        description: description.to_string(),
        icon: Some(icon.to_string()),
        features: features.iter().map(|s| s.to_string()).collect(),
    }
}

fn gallery_tile(src: &str, badge: bool) -> GalleryItem {
    GalleryItem {
        src: src.to_string(),
        title: None,
        description: None,
        badge,
    }
}

fn contact_card(icon: &str, title: &str, value: &str, link: Option<&str>) -> ContactCard {
    ContactCard {
        icon: icon.to_string(),
        title: title.to_string(),
        value: value.to_string(),
        link: link.map(str::to_string),
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: "LPK KIBOU GENIUS".to_string(),
            hero: HeroContent {
                title: StyledTitle::parse("LPK <b>KIBOU</b> <br>GENIUS"),
                tagline: "Pelatihan bahasa Jepang dan penempatan kerja ke Jepang".to_string(),
            },
            about: AboutContent {
                heading: "TENTANG KAMI".to_string(),
                summary: "LPK KIBOU adalah Lembaga Pelatihan Kerja yang berdiri sejak 2023 sebagai \
                    Lembaga resmi yang menyediakan layanan untuk pendidikan bahasa jepang dan \
                    pengiriman tenaga kerja ke Jepang. Kami menyediakan pelatihan bahasa Jepang \
                    intensif dan penempatan kerja di berbagai bidang seperti manufaktur, \
                    konstruksi, kaigo (perawat lansia), cleaning service, dan industri otomotif \
                    di perusahaan terpercaya di seluruh Jepang."
                    .to_string(),
                vision: "Menjadi lembaga pelatihan keterampilan unggulan dalam pengembangan Bahasa \
                    Jepang, yang profesional dan adaptif terhadap perkembangan global serta \
                    teknologi, demi mencetak sumber daya manusia yang siap bersaing di tingkat \
                    internasional"
                    .to_string(),
                missions: vec![
                    "Menyiapkan peserta didik untuk siap mengikuti program magang kerja di luar \
                     negeri, khususnya di Jepang, dengan keterampilan dan sikap profesional."
                        .to_string(),
                    "Memberikan layanan pendidikan dan pelatihan yang berkualitas, berorientasi \
                     pada kebutuhan masyarakat serta perkembangan dunia kerja global."
                        .to_string(),
                ],
            },
            programs_heading: "PROGRAM".to_string(),
            programs: vec![
                ProgramSlide {
                    title: StyledTitle::parse("TOKUTEI GINOU <b>( TG )</b>"),
                    sections: vec![
                        section(
                            "Deskripsi",
                            SectionBody::Paragraph(
                                "program visa kerja resmi dari pemerintah Jepang yang ditujukan \
                                 untuk tenaga kerja asing yang memiliki keterampilan khusus dalam \
                                 bidang tertentu. Program ini bukan magang, melainkan status kerja \
                                 penuh dengan gaji dan hak-hak seperti pekerja Jepang lainnya."
                                    .to_string(),
                            ),
                        ),
                        section(
                            "Alur Pembelajaran",
                            bullets(&[
                                "Pelatihan Bahasa , Skill, dan Wawancara",
                                "Test Skill ( SSW ) dan Test Bahasa ( JLPT )",
                                "Pencarian JOB ( Job Order )",
                                "Wawancara dengan Perusahaan Jepang",
                                "Pengurusan COE",
                                "Pengurusan Visa",
                                "Keberangkatan ke Jepang",
                            ]),
                        ),
                    ],
                },
                ProgramSlide {
                    title: StyledTitle::parse("PROGRAM <b>MAGANG</b> SWASTA"),
                    sections: vec![
                        section(
                            "Deskripsi",
                            SectionBody::Paragraph(
                                "Program magang kerja ke Jepang melalui jalur kerja sama dengan \
                                 LPK resmi yang telah memiliki lisensi sebagai Sending Organization \
                                 (SO). Peserta akan menjalani pelatihan bahasa dan keterampilan \
                                 kerja sebelum diberangkatkan ke perusahaan Jepang dalam berbagai \
                                 sektor industri. Program ini bertujuan untuk memberikan pengalaman \
                                 kerja internasional dan transfer teknologi, sekaligus meningkatkan \
                                 kedisiplinan dan kemandirian peserta."
                                    .to_string(),
                            ),
                        ),
                        section(
                            "Kewajiban Peserta",
                            bullets(&[
                                "Kontrak Kerja selama 1 - 3 tahun",
                                "Menaati peraturan yang ditetapkan oleh LPK dan perusahaan Jepang",
                                "Kembali ke Indonesia setelah masa kontrak berakhir",
                            ]),
                        ),
                    ],
                },
                ProgramSlide {
                    title: StyledTitle::parse("PROGRAM MAGANG NEGERI"),
                    sections: vec![
                        section(
                            "Deskripsi",
                            SectionBody::Paragraph(
                                "Program magang ke Jepang melalui kerja sama resmi dengan \
                                 pemerintah Indonesia dan IM Japan. Peserta akan mengikuti proses \
                                 seleksi ketat dan pelatihan komprehensif sebelum diberangkatkan. \
                                 Tujuan utama program ini adalah untuk menciptakan tenaga kerja \
                                 yang terampil, mandiri, dan siap bersaing secara global melalui \
                                 pengalaman kerja nyata di Jepang."
                                    .to_string(),
                            ),
                        ),
                        section(
                            "Layanan & Fasilitas",
                            bullets(&[
                                "Seleksi dan pelatihan yang difasilitasi langsung oleh pemerintah Indonesia",
                                "Biaya pemberangkatan sangat ringan hingga gratis",
                                "Pelatihan intensif bahasa, budaya kerja, dan fisik selama masa pra-pemberangkatan",
                                "Sertifikat pengalaman kerja dan peluang wirausaha setelah kembali ke Indonesia",
                            ]),
                        ),
                    ],
                },
            ],
            story_title: StyledTitle::parse("Ma<b>teri</b> <br>Pembelajaran"),
            story_pages: vec![
                story_page(
                    "Bumpo",
                    "文",
                    "Mempelajari tata bahasa jepang mencakup aturan mengenai cara menyusun kata \
                     dan kalimat yang benar dalam bahasa Jepang.",
                    [
                        "Memahami struktur dasar kalimat bahasa Jepang (SPO / SOP / etc.).",
                        "Mampu menggunakan partikel dengan tepat (seperti wa, ga, o, ni, de, dll).",
                        "Mengaplikasikan pola-pola kalimat umum dalam percakapan dan penulisan.",
                    ],
                ),
                story_page(
                    "Kotoba",
                    "言",
                    "berfokus pada penguasaan kosakata dalam bahasa Jepang yang digunakan dalam \
                     kehidupan sehari-hari, dunia kerja, dan sesuai bidang industri peserta",
                    [
                        "Menambah jumlah kosakata dasar dan tematik",
                        "Meningkatkan kemampuan memahami bacaan dan percakapan.",
                        "Mempersiapkan siswa untuk tes kemampuan bahasa seperti JLPT atau JFT-Basic.",
                    ],
                ),
                story_page(
                    "Wawancara",
                    "話",
                    "latihan simulasi wawancara kerja dalam bahasa Jepang, untuk mempersiapkan \
                     peserta menghadapi proses seleksi kerja baik secara langsung maupun daring.",
                    [
                        "Melatih kepercayaan diri dalam menjawab pertanyaan wawancara.",
                        "Mempelajari etika dan sopan santun Jepang saat wawancara.",
                        "Menguasai jawaban-jawaban umum dan personalisasi jawaban sesuai profil diri.",
                    ],
                ),
                story_page(
                    "Fisik",
                    "体",
                    "Melatih fisik agar siswa memiliki kebugaran dan ketahanan tubuh untuk \
                     lingkungan kerja yang seringkali menuntut kondisi fisik prima.",
                    [
                        "Meningkatkan stamina dan kekuatan otot.",
                        "Mempersiapkan tubuh untuk pekerjaan yang melibatkan aktivitas fisik.",
                        "Menanamkan disiplin dan gaya hidup sehat seperti yang diterapkan dalam budaya kerja Jepang.",
                    ],
                ),
            ],
            gallery_heading: "GALERI".to_string(),
            gallery: vec![
                gallery_tile("img/galeri-1.jpeg", true),
                gallery_tile("img/galeri-2.jpeg", true),
                gallery_tile("img/galeri-3.jpeg", true),
                GalleryItem {
                    src: String::new(),
                    title: Some(StyledTitle::parse("s<b>e</b>gera <b>h</b>adi<b>r</b>.")),
                    description: None,
                    badge: false,
                },
            ],
            contact_heading: "Kontak Kami".to_string(),
            contact_cards: vec![
                contact_card("✉", "Email", "lpk.kibougenius@gmail.com", None),
                contact_card(
                    "☎",
                    "WhatsApp",
                    "+62 813-2583-5578",
                    Some("https://wa.me/6281325835578"),
                ),
                contact_card("📷", "Instagram", "@lpk.kibougenius", None),
                contact_card("♪", "TikTok", "@lpk.kibougenius", None),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slide_set_is_rejected() {
        let result = SlideSet::<u8>::new(Vec::new());
        assert!(matches!(result, Err(SiteError::EmptySlideSet)));
    }

    #[test]
    fn wrap_handles_both_directions() {
        let slides = SlideSet::new(vec!['a', 'b', 'c']).unwrap();
        assert_eq!(slides.next_index(2), 0);
        assert_eq!(slides.prev_index(0), 2);
        assert_eq!(slides.wrap(-4), 2);
        assert_eq!(slides.wrap(7), 1);
        assert_eq!(slides.wrap_index(usize::MAX), usize::MAX % 3);
        assert_eq!(slides.next_index(usize::MAX), (usize::MAX % 3 + 1) % 3);
        assert_eq!(slides.prev_index(0), 2);
        assert_eq!(*slides.get(5), 'c');
    }

    #[test]
    fn section_body_accepts_string_or_list() {
        let para: SectionBody = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(para, SectionBody::Paragraph("hello".to_string()));

        let list: SectionBody = serde_json::from_str("[\"a\", \"b\"]").unwrap();
        assert_eq!(
            list,
            SectionBody::BulletList(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn default_content_has_every_section() {
        let content = SiteContent::default();
        assert_eq!(content.program_slides().unwrap().len(), 3);
        assert_eq!(content.story_slides().unwrap().len(), 4);
        assert_eq!(content.contact_cards.len(), 4);
        assert!(content.story_pages.iter().all(|p| p.visible_features().len() <= 3));
    }

    #[test]
    fn default_content_survives_json() {
        let content = SiteContent::default();
        let json = serde_json::to_string(&content).unwrap();
        let parsed = SiteContent::from_json_str(&json).unwrap();
        assert_eq!(parsed, content);
    }
}
