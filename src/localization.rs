use color_print::cstr;

pub enum Language {
    English,
    Chinese,
}

pub struct Localization<'a> {
    // About message and templates
    pub about_msg: &'a str,
    pub help_template: &'a str,

    // Argument descriptions
    pub input_dir_arg_desc: &'a str,
    pub output_arg_desc: &'a str,
    pub custom_dir_arg_desc: &'a str,
    pub base_url_arg_desc: &'a str,
    pub suffix_arg_desc: &'a str,
    pub language_arg_desc: &'a str,
    pub log_arg_desc: &'a str,
    pub help_arg_desc: &'a str,
    pub version_flag_desc: &'a str,

    // Argument types
    pub input_path_arg_type: &'a str,
    pub output_path_arg_type: &'a str,
    pub url_arg_type: &'a str,
    pub language_arg_type: &'a str,

    // Messages and warnings
    pub loading_text_msg: &'a str,
    pub grabbing_data_msg: &'a str,
    pub ruleset_msg: &'a str,
    pub ruleset_applied_msg: &'a str,
    pub unresolved_id_msg: &'a str,
    pub translate_failed_msg: &'a str,
    pub omitted_id_msg: &'a str,
    pub suffix_file_skipped_msg: &'a str,
    pub output_written_msg: &'a str,
    pub fatal_error_msg: &'a str,
    pub elapsed_time_msg: &'a str,

    // Misc
    pub allowed_values: &'a str,
    pub example: &'a str,
}

impl Localization<'_> {
    pub const fn new(language: Language) -> Self {
        match language {
            Language::English => Self::init_en(),
            Language::Chinese => Self::init_zh(),
        }
    }

    const fn init_en() -> Self {
        Localization {
            about_msg: cstr!(
                r#"<bold>Merges item stats from the cstone item database into the bilingual localization file. Without arguments, reads en.ini, cn.ini and global.ini from "text_files/VERSION" and writes output.ini next to them.</>"#
            ),
            help_template: cstr!(
                "{about}\n\n<underline,bold>Usage:</> scloc-gen [OPTIONS]\n\n<underline,bold>Options:</>\n{options}"
            ),

            input_dir_arg_desc: "Directory containing en.ini, cn.ini and global.ini.",
            output_arg_desc: "Path of the generated file. Defaults to output.ini inside the input directory.",
            custom_dir_arg_desc: "Directory with direct_id, replace_map, ignore and general_replace overrides.",
            base_url_arg_desc: "Base URL of the item database API.",
            suffix_arg_desc: "Files whose contents are appended verbatim after the generated entries.",
            language_arg_desc: "Sets the localization of the tool to the selected language.",
            log_arg_desc: "Enables logging.",
            help_arg_desc: "Prints the program's help message.",
            version_flag_desc: "Show program's version.",

            input_path_arg_type: "INPUT_PATH",
            output_path_arg_type: "OUTPUT_PATH",
            url_arg_type: "URL",
            language_arg_type: "LANGUAGE",

            loading_text_msg: "Loading text files from",
            grabbing_data_msg: "Grabbing item data from",
            ruleset_msg: "Ruleset",
            ruleset_applied_msg: "translated/skipped/unresolved/failed:",
            unresolved_id_msg: "No text entry matches",
            translate_failed_msg: "Could not translate",
            omitted_id_msg: "No result or fallback text, line omitted:",
            suffix_file_skipped_msg: "Suffix file skipped:",
            output_written_msg: "Lines written to",
            fatal_error_msg: "Generation aborted:",
            elapsed_time_msg: "Elapsed time:",

            allowed_values: "Allowed values:",
            example: "Example:",
        }
    }

    const fn init_zh() -> Self {
        Localization {
            about_msg: cstr!(
                r#"<bold>将 cstone 物品数据库中的物品属性合并进双语本地化文件。不带参数时，从 "text_files/版本号" 读取 en.ini、cn.ini 和 global.ini，并在同目录生成 output.ini。</>"#
            ),
            help_template: cstr!(
                "{about}\n\n<underline,bold>用法:</> scloc-gen [选项]\n\n<underline,bold>选项:</>\n{options}"
            ),

            input_dir_arg_desc: "包含 en.ini、cn.ini 和 global.ini 的目录。",
            output_arg_desc: "生成文件的路径，默认为输入目录下的 output.ini。",
            custom_dir_arg_desc: "存放 direct_id、replace_map、ignore 与 general_replace 自定义文件的目录。",
            base_url_arg_desc: "物品数据库 API 的基础地址。",
            suffix_arg_desc: "在生成内容之后原样追加其内容的文件。",
            language_arg_desc: "设置工具界面的语言。",
            log_arg_desc: "启用日志。",
            help_arg_desc: "显示帮助信息。",
            version_flag_desc: "显示程序版本。",

            input_path_arg_type: "输入路径",
            output_path_arg_type: "输出路径",
            url_arg_type: "地址",
            language_arg_type: "语言",

            loading_text_msg: "正在读取文本文件:",
            grabbing_data_msg: "正在抓取物品数据:",
            ruleset_msg: "规则集",
            ruleset_applied_msg: "已翻译/已跳过/未匹配/失败:",
            unresolved_id_msg: "没有匹配的文本条目:",
            translate_failed_msg: "翻译失败:",
            omitted_id_msg: "没有结果或备用文本，已省略:",
            suffix_file_skipped_msg: "已跳过后缀文件:",
            output_written_msg: "行已写入",
            fatal_error_msg: "生成中止:",
            elapsed_time_msg: "耗时:",

            allowed_values: "可选值:",
            example: "示例:",
        }
    }
}
