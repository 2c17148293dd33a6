//! Narration scripts.
//!
//! These are read aloud by the speech engine. They are kept apart from the page content in
//! `topics.rs` and are edited independently; nothing derives one from the other.

pub const GENEL: &str = "Genel Bilgiler. Ameliyat hakkında temel bilgiler ve sık sorulan sorular. \
Açık kalp ameliyatı; koroner arter hastalığı, kapak hastalıkları ve kalp yetmezliği gibi durumların \
tedavisinde kullanılan kapsamlı bir cerrahi işlemdir.";

pub const ONCESI: &str = "Ameliyat Öncesi Dönem. Hazırlık adımları, ilaçlar ve yapılması gerekenler. \
İyi bir hazırlık, mümkün olan en iyi sonucun alınmasını sağlar. \
Gece yarısından itibaren hiçbir şey yemeyiniz ve içmeyiniz. \
Size verilen antiseptik sabunla duş alınız.";

pub const AMELIYAT: &str = "Ameliyathane Dönemi. Ameliyat sırasında neler yaşanır, ekip ve prosedür. \
Ameliyathane, bakımınıza adanmış uzmanlar ekibinin yer aldığı son derece kontrollü bir ortamdır. \
Ameliyat sırasında hiçbir şey hissetmeyeceksiniz.";

pub const VIDEOLAR: &str = "Videolar. Eğitim videoları ve animasyonlu anlatımlar. \
Bu bölümde ameliyat sürecini görsel olarak anlamanıza yardımcı olacak eğitim videoları bulunmaktadır.";

pub const AYARLAR: &str = "Ayarlar. Yazı boyutu, ses ayarları ve erişilebilirlik seçenekleri. \
Bu bölümde uygulamayı kendi ihtiyaçlarınıza göre özelleştirebilirsiniz.";
