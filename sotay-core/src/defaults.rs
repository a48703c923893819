//! Category set seeded for a new family

use crate::category::{Category, TransactionType};

const EXPENSE: TransactionType = TransactionType::Expense;
const INCOME: TransactionType = TransactionType::Income;

const NEUTRAL_COLOR: &str = "#6b7280";

fn seed(slug: &str, name: &str, kind: TransactionType, icon: &str, keywords: &[&str]) -> Category {
    let mut cat = Category::new(slug, name, kind, keywords).with_icon(icon);
    cat.color = Some(NEUTRAL_COLOR.to_string());
    cat
}

/// Default categories in seeding order: 13 expense, then 7 income.
/// The last category of each type is the catch-all.
pub fn default_categories() -> Vec<Category> {
    vec![
        seed("an-uong", "Ăn uống", EXPENSE, "🍜", &[
            "ăn", "uống", "cơm", "phở", "bún", "cafe", "cà phê", "trà sữa", "nhậu", "bia", "quán",
            "bánh", "bánh mì", "bánh ngọt", "đồ ăn", "thức ăn", "nước ngọt", "sữa", "trà", "cháo", "mì",
            "lẩu", "nướng", "gà", "heo", "bò", "cá", "hải sản", "rau", "trái cây", "kem", "pizza",
            "hamburger", "gỏi", "nem", "chả", "xôi", "cơm tấm", "hủ tiếu", "miến", "bún bò", "bún chả",
            "bún riêu", "canh", "súp", "ốc", "tôm", "mực", "cua", "sò", "nghêu", "rượu", "nước ép",
            "sinh tố", "smoothie", "yogurt", "sữa chua", "kfc", "lotteria", "mcdonalds", "jollibee",
            "highlands", "starbucks", "phúc long", "tocotoco", "gongcha", "koi", "dingtea",
            "bữa sáng", "bữa trưa", "bữa tối", "ăn sáng", "ăn trưa", "ăn tối", "đi ăn", "order đồ ăn",
            "grab food", "shopee food", "baemin", "gofood", "now", "đặt đồ ăn", "snack", "đồ ăn vặt",
        ]),
        seed("xang-xe", "Xăng xe", EXPENSE, "⛽", &[
            "xăng", "đổ xăng", "petrol", "dầu", "nhiên liệu", "xăng xe", "đổ dầu", "gas xe",
            "petrolimex", "pvoil", "shell", "cây xăng", "trạm xăng",
        ]),
        seed("mua-sam", "Mua sắm", EXPENSE, "🛒", &[
            "siêu thị", "mua", "shopping", "chợ", "bigc", "coopmart", "vinmart", "lotte", "mua đồ", "sắm",
            "aeon", "emart", "mega market", "mm mega", "bách hóa xanh", "winmart", "go", "tops market",
            "shopee", "lazada", "tiki", "sendo", "thế giới di động", "điện máy xanh", "fpt shop",
            "đồ gia dụng", "nội thất", "đồ dùng", "tạp hóa", "cửa hàng", "mỹ phẩm", "son", "kem dưỡng",
            "guardian", "watsons", "hasaki", "order", "đặt hàng",
        ]),
        seed("dien-nuoc", "Điện nước", EXPENSE, "💡", &[
            "tiền điện", "tiền nước", "internet", "wifi", "gas", "hóa đơn điện", "hóa đơn nước",
            "evn", "điện lực", "nước máy", "sawaco", "fpt", "viettel", "vnpt", "mobifone", "sctv",
            "k+", "truyền hình cáp", "phí chung cư", "phí quản lý", "tiền nhà", "thuê nhà",
            "tiền thuê", "tiền phòng", "điện thoại", "cước điện thoại", "data 4g", "5g",
        ]),
        seed("di-chuyen", "Di chuyển", EXPENSE, "🚗", &[
            "grab", "taxi", "xe ôm", "gửi xe", "đậu xe", "vé xe", "tàu", "máy bay", "vé máy bay",
            "be", "gojek", "xanh sm", "mai linh", "vinasun", "uber", "vé tàu", "xe buýt", "bus",
            "metro", "tàu điện", "phà", "canô", "thuê xe", "rửa xe", "sửa xe", "bảo dưỡng xe",
            "thay nhớt", "thay lốp", "vá xe", "bơm xe", "toll", "phí cầu đường", "cao tốc",
            "vietnam airlines", "vietjet", "bamboo", "pacific airlines", "booking", "traveloka",
        ]),
        seed("y-te", "Y tế", EXPENSE, "🏥", &[
            "thuốc", "khám", "bệnh viện", "doctor", "y tế", "nha khoa", "bác sĩ", "viện", "phòng khám",
            "nhà thuốc", "pharmacy", "long châu", "pharmacity", "an khang", "khám bệnh", "xét nghiệm",
            "siêu âm", "x-quang", "chụp chiếu", "tiêm", "vaccine", "bảo hiểm y tế", "bhyt",
            "mắt", "kính", "răng", "niềng răng", "tẩy trắng", "thẩm mỹ", "da liễu", "viện phí",
            "thuốc bổ", "vitamin", "thực phẩm chức năng",
        ]),
        seed("giai-tri", "Giải trí", EXPENSE, "🎬", &[
            "phim", "game", "karaoke", "du lịch", "chơi", "giải trí", "đi chơi", "vui chơi", "spa", "massage",
            "rạp", "cgv", "lotte cinema", "galaxy", "bhd", "beta", "cinema", "netflix", "spotify", "youtube",
            "subscription", "đăng ký", "thành viên", "vip", "premium", "billiard", "bowling", "gym", "fitness",
            "yoga", "bơi", "hồ bơi", "công viên", "khu vui chơi", "bar", "club", "pub", "nhạc sống",
            "concert", "show", "biểu diễn", "triển lãm", "bảo tàng", "sở thú", "vinpearl", "đầm sen",
            "suối tiên", "escape room", "team building", "picnic", "cắm trại", "camping",
        ]),
        seed("hoc-tap", "Học tập", EXPENSE, "📚", &[
            "học", "sách", "khóa học", "học phí", "trường", "lớp học", "học viện", "đại học", "cao đẳng",
            "trung tâm", "gia sư", "kèm", "tiếng anh", "tiếng nhật", "tiếng hàn", "tiếng trung", "ngoại ngữ",
            "ielts", "toeic", "toefl", "chứng chỉ", "bằng cấp", "udemy", "coursera", "skillshare",
            "văn phòng phẩm", "bút", "vở", "giấy", "máy tính", "laptop", "tablet", "ipad",
            "edx", "linkedin learning", "duolingo", "elsa", "ôn thi",
        ]),
        seed("quan-ao", "Quần áo", EXPENSE, "👕", &[
            "quần", "áo", "giày", "dép", "túi xách", "thời trang", "mũ", "nón", "kính mát",
            "đầm", "váy", "vest", "sơ mi", "áo thun", "quần jean", "quần tây", "đồ ngủ",
            "đồ lót", "bikini", "đồ bơi", "uniqlo", "zara", "h&m", "canifa", "hnm",
            "nike", "adidas", "puma", "converse", "vans", "gucci", "chanel", "louis vuitton",
            "balo", "ví", "thắt lưng", "dây nịt", "đồng hồ", "trang sức", "nhẫn", "vòng", "dây chuyền",
        ]),
        seed("con-cai", "Con cái", EXPENSE, "👶", &[
            "con", "bé", "em bé", "sữa", "bỉm", "tã", "đồ chơi", "đồ sơ sinh", "quần áo trẻ em",
            "học phí con", "trường con", "nhà trẻ", "mẫu giáo", "mầm non", "tiểu học", "trung học",
            "tiền tiêu con", "cho con", "mua cho con", "đồ dùng học tập",
        ]),
        seed("thu-cung", "Thú cưng", EXPENSE, "🐕", &[
            "chó", "mèo", "thú cưng", "pet", "thức ăn thú cưng", "pet shop", "thú y", "tiêm phòng",
            "tắm chó", "grooming", "cắt lông", "lồng", "chuồng", "đồ chơi thú cưng",
        ]),
        seed("lam-dep", "Làm đẹp", EXPENSE, "💅", &[
            "cắt tóc", "nhuộm", "uốn", "duỗi", "làm nail", "nail", "mi", "lông mi", "phun xăm",
            "tattoo", "spa mặt", "chăm sóc da", "facial", "tẩy lông", "triệt lông", "hair salon",
            "30shine", "tóc đẹp", "làm tóc",
        ]),
        seed("khac", "Khác", EXPENSE, "📦", &[]).as_default(),
        seed("luong", "Lương", INCOME, "💰", &[
            "lương", "salary", "lương tháng", "nhận lương", "lĩnh lương", "chuyển lương",
            "lương cơ bản", "lương net", "lương gross", "thu nhập chính", "tiền công",
        ]),
        seed("thuong", "Thưởng", INCOME, "🎁", &[
            "thưởng", "bonus", "kpi", "hoa hồng", "commission", "thưởng tết", "thưởng lễ",
            "thưởng dự án", "thưởng cuối năm", "13 tháng", "tháng 13", "incentive",
        ]),
        seed("dau-tu", "Đầu tư", INCOME, "📈", &[
            "cổ phiếu", "lãi", "đầu tư", "crypto", "bitcoin", "lãi suất", "cổ tức", "dividend",
            "chứng khoán", "trái phiếu", "quỹ", "fund", "vnindex", "eth", "btc", "usdt",
            "lãi tiết kiệm", "lãi gửi", "lãi ngân hàng",
        ]),
        seed("kinh-doanh", "Kinh doanh", INCOME, "🏪", &[
            "bán hàng", "kinh doanh", "doanh thu", "thu bán", "bán", "shop", "cửa hàng",
            "online", "shopee thu", "lazada thu", "tiki thu", "khách trả", "thu tiền hàng",
        ]),
        seed("freelance", "Freelance", INCOME, "💻", &[
            "freelance", "project", "dự án", "làm thêm", "part time", "hợp đồng", "contract",
            "client", "khách hàng", "thu dự án", "freelancer",
        ]),
        seed("cho-thue", "Cho thuê", INCOME, "🏠", &[
            "cho thuê", "thuê nhà", "tiền thuê", "thu thuê", "phòng trọ", "thuê phòng",
            "rental", "căn hộ cho thuê", "mặt bằng",
        ]),
        seed("thu-nhap-khac", "Thu nhập khác", INCOME, "💵", &[
            "thu nhập", "nhận tiền", "cho", "được cho", "quà", "mừng", "lì xì", "tiền mừng",
        ])
        .as_default(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let cats = default_categories();
        assert_eq!(cats.iter().filter(|c| c.is_expense()).count(), 13);
        assert_eq!(cats.iter().filter(|c| c.is_income()).count(), 7);

        let income: Vec<&str> = cats
            .iter()
            .filter(|c| c.is_income())
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            income,
            vec!["Lương", "Thưởng", "Đầu tư", "Kinh doanh", "Freelance", "Cho thuê", "Thu nhập khác"]
        );
    }

    #[test]
    fn test_one_catch_all_per_type() {
        let cats = default_categories();
        let defaults: Vec<&str> = cats
            .iter()
            .filter(|c| c.is_default)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(defaults, vec!["Khác", "Thu nhập khác"]);
    }

    #[test]
    fn test_keywords_are_normalized() {
        for cat in default_categories() {
            for kw in &cat.keywords {
                assert_eq!(kw, &kw.trim().to_lowercase(), "{} has unnormalized keyword {kw}", cat.name);
            }
        }
    }
}
