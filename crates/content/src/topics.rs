use crate::scripts;
use crate::section::ContentSection::{self, Body, Heading, Keypoint, Steps, Tip, Warning};
use crate::topic::{Icon, TopicRecord};

// Authoring order is the navigation order.
pub(crate) static TOPICS: [TopicRecord; 5] = [
    TopicRecord {
        id: "genel",
        title: "Genel Bilgiler",
        subtitle: "Açık kalp ameliyatı hakkında temel bilgiler",
        card_title: "GENEL BİLGİLER",
        card_subtitle: "Ameliyat hakkında temel bilgiler ve sık sorulan sorular",
        narration_script: scripts::GENEL,
        content: GENEL,
        accent_color: "#D32F2F",
        icon: Icon::Heart,
        tag: Some("Başlangıç"),
        read_time: "5 dk okuma",
    },
    TopicRecord {
        id: "oncesi",
        title: "Ameliyat Öncesi Dönem",
        subtitle: "Ameliyata hazırlık için yapmanız gerekenler",
        card_title: "AMELİYAT ÖNCESİ DÖNEM",
        card_subtitle: "Hazırlık adımları, ilaçlar ve yapılması gerekenler",
        narration_script: scripts::ONCESI,
        content: ONCESI,
        accent_color: "#1565C0",
        icon: Icon::ClipboardList,
        tag: Some("Önemli"),
        read_time: "7 dk okuma",
    },
    TopicRecord {
        id: "ameliyat",
        title: "Ameliyathane Dönemi",
        subtitle: "Ameliyat sırasında neler yaşanır",
        card_title: "AMELİYATHANE DÖNEMİ",
        card_subtitle: "Ameliyat sürecinde neler yaşanır, ekip ve prosedür",
        narration_script: scripts::AMELIYAT,
        content: AMELIYAT,
        accent_color: "#5E35B1",
        icon: Icon::Stethoscope,
        tag: None,
        read_time: "6 dk okuma",
    },
    TopicRecord {
        id: "videolar",
        title: "Videolar",
        subtitle: "Eğitim videoları ve animasyonlu anlatımlar",
        card_title: "VİDEOLAR",
        card_subtitle: "Eğitim videoları ve animasyonlu anlatımlar",
        narration_script: scripts::VIDEOLAR,
        content: VIDEOLAR,
        accent_color: "#2E7D32",
        icon: Icon::Video,
        tag: Some("Yeni"),
        read_time: "4 dk okuma",
    },
    TopicRecord {
        id: "ayarlar",
        title: "Ayarlar",
        subtitle: "Erişilebilirlik ve uygulama tercihleri",
        card_title: "AYARLAR",
        card_subtitle: "Yazı boyutu, ses ayarları ve erişilebilirlik seçenekleri",
        narration_script: scripts::AYARLAR,
        content: AYARLAR,
        accent_color: "#E65100",
        icon: Icon::Settings,
        tag: None,
        read_time: "3 dk okuma",
    },
];

const GENEL: &[ContentSection] = &[
    Body {
        text: "Açık kalp ameliyatı, kalp damar hastalıklarının tedavisinde uygulanan kapsamlı bir \
cerrahi işlemdir. Bu ameliyat; koroner arter hastalığı, kapak hastalıkları ve kalp yetmezliği gibi \
durumların tedavisinde kullanılır.",
    },
    Heading {
        text: "Ameliyat Neden Gereklidir?",
    },
    Body {
        text: "Doktorunuz, kalp fonksiyonlarınızı iyileştirmek ve yaşam kalitenizi artırmak için bu \
ameliyatı önermiştir. İşlem, kan akışını düzelterek semptomlarınızı azaltacaktır.",
    },
    Keypoint {
        label: Some("Önemli Bilgi"),
        text: "Açık kalp ameliyatı, dünya genelinde her yıl milyonlarca kez başarıyla \
gerçekleştirilmektedir.",
    },
    Heading {
        text: "Ameliyat Sırasında Neler Olur?",
    },
    Steps {
        steps: &[
            "Genel anestezi uygulanarak uykuya geçirilirsiniz",
            "Cerrah göğsünüzün ortasından bir kesi yapar",
            "Göğüs kemiği (sternum) ayrılarak kalbe ulaşılır",
            "Kalp-akciğer bypass makinesi devreye girer",
            "Cerrah etkilenen bölgeyi onarır veya yenisiyle değiştirir",
            "Göğüs teli ve dikişlerle özenle kapatılır",
        ],
    },
    Tip {
        label: Some("Güvence"),
        text: "Endişe duymak tamamen normaldir. Cerrahi ekibiniz bu işlemi rutin olarak \
gerçekleştirmekte ve her adımda yanınızda olacaktır.",
    },
    Heading {
        text: "Ameliyat Ne Kadar Sürer?",
    },
    Body {
        text: "Ameliyat karmaşıklığa bağlı olarak genellikle 3 ila 6 saat sürer. Aileniz, belirlenen \
bekleme alanında bekleyebilir ve hemşire tarafından düzenli olarak bilgilendirilecektir.",
    },
];

const ONCESI: &[ContentSection] = &[
    Body {
        text: "İyi bir hazırlık, mümkün olan en iyi sonucun alınmasını sağlar. Ameliyattan önceki \
günlerde bu talimatları dikkatle uygulayınız.",
    },
    Heading {
        text: "Ameliyat Öncesi Gece",
    },
    Steps {
        steps: &[
            "Gece yarısından itibaren hiçbir şey yemeyiniz ve içmeyiniz",
            "Size verilen antiseptik sabunla duş alınız",
            "Oje ve takılarınızı çıkarınız",
            "Rahat kıyafetler ve kişisel eşyalarla bir çanta hazırlayınız",
            "Sizi götürecek bir yakınınızla anlaşınız",
            "İyi bir gece uykusu çekmeye çalışınız",
        ],
    },
    Warning {
        label: Some("Dikkat"),
        text: "Cerrahınız özellikle belirtmedikçe, ameliyattan 7 gün önce kan sulandırıcılar, \
aspirin veya ibuprofen ALMAYIN.",
    },
    Heading {
        text: "İlaçlarınız",
    },
    Body {
        text: "Cerrahi ekibiniz ilaçlarınızı gözden geçirecektir. Bazı ilaçlar ameliyat öncesi \
kesilmeli, bazıları ise kullanılmaya devam edilmelidir. Her zaman ekibinizle teyit ediniz.",
    },
    Keypoint {
        label: Some("Hastaneye Getirin"),
        text: "Tüm ilaçlarınızın (vitamin ve takviyeler dahil) listesi, sigorta kartlarınız ve \
kimlik belgenizle birlikte gelmeyi unutmayınız.",
    },
    Heading {
        text: "Hastanede Neler Bekleniyor?",
    },
    Body {
        text: "Ameliyattan birkaç saat önce hastaneye kabul edileceksiniz. Hemşireler damar yolu \
açacak, cerrahi bölgeyi hazırlayacak ve son testleri yapacaklardır. Anestezi ekibinden bir üye \
sizi ziyaret edecektir.",
    },
    Tip {
        label: Some("İpucu"),
        text: "Aklınıza gelen soruları yazın ve yanınızda getirin. Hiçbir soru küçük değildir, \
ekibiniz size yardımcı olmak için burada.",
    },
];

const AMELIYAT: &[ContentSection] = &[
    Body {
        text: "Ameliyathane, bakımınıza adanmış bir uzmanlar ekibinin yer aldığı son derece \
kontrollü bir ortamdır. Süreç hakkında bilgi sahibi olmak korku ve kaygıyı azaltır.",
    },
    Heading {
        text: "Cerrahi Ekibiniz",
    },
    Steps {
        steps: &[
            "Kalp Cerrahı: işlemi yöneten baş hekim",
            "Yardımcı Cerrahlar: operasyona destek verir",
            "Anesteziyolog: güvenliğinizi ve konforunuzu sağlar",
            "Perfüzyonist: kalp-akciğer bypass makinesini çalıştırır",
            "Scrub Hemşiresi: cerraha aletleri uzatır",
            "Sirkülasyon Hemşiresi: ameliyathane ortamını koordine eder",
        ],
    },
    Keypoint {
        label: Some("Güvenliğiniz"),
        text: "Ameliyathane ekibi, işlem öncesinde, sırasında ve sonrasında birden fazla güvenlik \
kontrolü gerçekleştirir. Refahınız her şeyin önünde gelir.",
    },
    Heading {
        text: "Kalp-Akciğer Bypass Makinesi",
    },
    Body {
        text: "Ameliyat sırasında özel bir makine, kalp ve akciğerlerinizin işlevini geçici olarak \
üstlenir. Bu sayede cerrah durgun bir kalpte çalışabilir. Makine kanı dolaştırır, karbondioksiti \
uzaklaştırır ve oksijen ekler.",
    },
    Tip {
        label: Some("Bilgi"),
        text: "Ameliyat sırasında hiçbir şey hissetmeyeceksiniz. Anesteziyolog sizi tamamen rahat \
tutacak ve işlem boyunca yakından izleyecektir.",
    },
    Heading { text: "Uyanmak" },
    Body {
        text: "Ameliyat sonrası Yoğun Bakım Ünitesi'ne (YBÜ) taşınacaksınız. Solunum tüpüyle \
uyanabilirsiniz; kendi başınıza yeterince soluyabildiğinizde bu tüp genellikle birkaç saat içinde \
çıkarılır.",
    },
];

const VIDEOLAR: &[ContentSection] = &[
    Body {
        text: "Aşağıdaki eğitim videoları, ameliyat sürecini görsel olarak anlamanıza yardımcı olmak \
için hazırlanmıştır. Tüm videoları kendi hızınızda izleyebilirsiniz.",
    },
    Heading {
        text: "Mevcut Videolar",
    },
    Steps {
        steps: &[
            "Açık Kalp Ameliyatına Giriş (8 dk)",
            "Ameliyat Öncesi Hazırlık Adımları (5 dk)",
            "Ameliyathanede Neler Olur? (10 dk)",
            "YBÜ'de İlk Gün (6 dk)",
            "Solunum Egzersizleri Nasıl Yapılır? (4 dk)",
            "Taburculuk Sonrası Yara Bakımı (7 dk)",
        ],
    },
    Tip {
        label: Some("İpucu"),
        text: "Videoları bir yakınınızla birlikte izlemenizi öneririz. Bu, sizin için önemli olan \
kişilerin de süreci anlamasına yardımcı olur.",
    },
    Heading {
        text: "Animasyonlar",
    },
    Body {
        text: "Kalbinizin nasıl çalıştığını ve ameliyatın tam olarak ne yaptığını gösteren 3 \
boyutlu animasyonlara da erişebilirsiniz. Bu animasyonlar tıbbi terimler olmadan açık bir dil \
kullanmaktadır.",
    },
    Keypoint {
        label: Some("Erişilebilirlik"),
        text: "Tüm videolarda Türkçe altyazı mevcuttur. Oynatma hızını kendi ihtiyacınıza göre \
ayarlayabilirsiniz.",
    },
];

const AYARLAR: &[ContentSection] = &[
    Body {
        text: "Bu bölümde uygulamayı kendi ihtiyaçlarınıza göre özelleştirebilirsiniz. Yaşlı ve \
görme güçlüğü çeken kullanıcılar için özel seçenekler mevcuttur.",
    },
    Heading {
        text: "Görünüm Ayarları",
    },
    Steps {
        steps: &[
            "Yazı boyutunu küçük, orta veya büyük olarak seçin",
            "Yüksek kontrast modu açık/kapalı",
            "Gece modu için koyu tema seçeneği",
            "Ekran parlaklığını ayarlayın",
        ],
    },
    Heading {
        text: "Ses ve Konuşma",
    },
    Steps {
        steps: &[
            "Sesli okuma hızını yavaş, orta veya hızlı olarak ayarlayın",
            "Ses yüksekliğini kontrol edin",
            "Türkçe veya İngilizce ses dili seçin",
            "Otomatik oynatmayı etkinleştirin",
        ],
    },
    Keypoint {
        label: Some("Erişilebilirlik"),
        text: "Bu uygulama, ekran okuyucu (VoiceOver/TalkBack) ile tam uyumlu olacak şekilde \
tasarlanmıştır.",
    },
    Heading {
        text: "Bildirim Tercihleri",
    },
    Body {
        text: "İlaç hatırlatıcıları, randevu bildirimleri ve sağlık ipuçları için bildirimleri \
özelleştirebilirsiniz.",
    },
    Tip {
        label: Some("Öneri"),
        text: "Sesli okuma özelliğini etkinleştirmenizi tavsiye ederiz. Bu, özellikle uzun \
içerikleri gözden geçirirken oldukça kullanışlıdır.",
    },
];
