use super::{QuizQuestion, QuizType};

fn q(
    id: &'static str,
    quiz_type: QuizType,
    question: &'static str,
    options: [&'static str; 4],
    correct_answer: i64,
    explanation: &'static str,
    points: i64,
) -> QuizQuestion {
    QuizQuestion {
        id,
        quiz_type,
        question,
        options: options.to_vec(),
        correct_answer,
        explanation,
        points,
    }
}

pub(super) fn all() -> Vec<QuizQuestion> {
    let mut questions = Vec::new();

    // basic: 10 questions, 10 points each
    questions.extend([
        q(
            "q1_git_definition",
            QuizType::Basic,
            "Gitとは何ですか？",
            [
                "テキストエディタ",
                "バージョン管理システム",
                "プログラミング言語",
                "ウェブブラウザ",
            ],
            1,
            "Gitは分散型バージョン管理システムで、ファイルの変更履歴を効率的に管理するツールです。",
            10,
        ),
        q(
            "q2_github_purpose",
            QuizType::Basic,
            "GitHubの主な用途は何ですか？",
            ["動画共有", "SNS", "Gitリポジトリのホスティング", "オンラインゲーム"],
            2,
            "GitHubはGitリポジトリをクラウドでホスティングし、開発者同士の協力を支援するプラットフォームです。",
            10,
        ),
        q(
            "q3_commit_meaning",
            QuizType::Basic,
            "「コミット」とは何を意味しますか？",
            [
                "ファイルを削除する",
                "変更のスナップショットを記録する",
                "プログラムを実行する",
                "ファイルをダウンロードする",
            ],
            1,
            "コミットは、その時点でのファイルの状態を「スナップショット」として履歴に記録することです。",
            10,
        ),
        q(
            "q4_repository_definition",
            QuizType::Basic,
            "リポジトリとは何ですか？",
            [
                "プログラムのファイルと履歴を保存する場所",
                "インターネットブラウザ",
                "データベース管理システム",
                "画像編集ソフト",
            ],
            0,
            "リポジトリは、プロジェクトのファイルとその変更履歴を保存する「箱」のような場所です。",
            10,
        ),
        q(
            "q5_branch_concept",
            QuizType::Basic,
            "ブランチの役割は何ですか？",
            [
                "ファイルを圧縮する",
                "並行して開発を進められる",
                "バックアップを作る",
                "プログラムを高速化する",
            ],
            1,
            "ブランチは開発の流れを分岐させ、複数の機能を並行して開発できるようにする仕組みです。",
            10,
        ),
        q(
            "q6_pull_request",
            QuizType::Basic,
            "プルリクエストの目的は何ですか？",
            [
                "ファイルをダウンロードする",
                "コードレビューと統合の提案",
                "エラーを修正する",
                "プログラムを実行する",
            ],
            1,
            "プルリクエストは、変更をメインブランチに統合する前にコードレビューを行うための仕組みです。",
            10,
        ),
        q(
            "q7_clone_meaning",
            QuizType::Basic,
            "「クローン」の意味は？",
            [
                "ファイルを削除する",
                "リモートリポジトリをローカルにコピーする",
                "プログラムを実行する",
                "新しいファイルを作る",
            ],
            1,
            "クローンは、リモートリポジトリ（GitHubなど）をローカルマシンに完全にコピーすることです。",
            10,
        ),
        q(
            "q8_merge_process",
            QuizType::Basic,
            "マージとは何をすることですか？",
            [
                "ファイルを分割する",
                "2つのブランチを統合する",
                "プログラムを削除する",
                "バックアップを作る",
            ],
            1,
            "マージは、異なるブランチの変更を統合して、一つのブランチにまとめることです。",
            10,
        ),
        q(
            "q9_remote_local",
            QuizType::Basic,
            "リモートリポジトリとローカルリポジトリの違いは？",
            [
                "リモートはクラウド、ローカルは自分のPC",
                "違いはない",
                "リモートの方が高速",
                "ローカルの方が安全",
            ],
            0,
            "リモートリポジトリは GitHub などのクラウド上に、ローカルリポジトリは自分のコンピュータ上にあります。",
            10,
        ),
        q(
            "q10_staging_area",
            QuizType::Basic,
            "ステージングエリアの役割は？",
            [
                "ファイルを削除する場所",
                "コミット前に変更を準備する場所",
                "バックアップを保存する場所",
                "プログラムを実行する場所",
            ],
            1,
            "ステージングエリアは、コミットに含める変更を準備・選択するための中間的な場所です。",
            10,
        ),
    ]);

    // commands: 15 questions, 10 points each
    questions.extend([
        q(
            "q1_git_init",
            QuizType::Commands,
            "新しいGitリポジトリを初期化するコマンドは？",
            ["git start", "git init", "git new", "git create"],
            1,
            "git init コマンドで新しいGitリポジトリを初期化できます。",
            10,
        ),
        q(
            "q2_git_add_all",
            QuizType::Commands,
            "すべての変更をステージングエリアに追加するコマンドは？",
            ["git add *", "git add .", "git add all", "git stage ."],
            1,
            "git add . ですべての変更（新規・修正・削除）をステージングエリアに追加できます。",
            10,
        ),
        q(
            "q3_git_commit_message",
            QuizType::Commands,
            "メッセージ付きでコミットするコマンドは？",
            [
                "git commit \"message\"",
                "git commit -m \"message\"",
                "git save -m \"message\"",
                "git commit --message \"message\"",
            ],
            1,
            "git commit -m \"message\" でメッセージを付けてコミットできます。-m は message の略です。",
            10,
        ),
        q(
            "q4_git_status",
            QuizType::Commands,
            "現在の作業ディレクトリの状態を確認するコマンドは？",
            ["git check", "git status", "git info", "git state"],
            1,
            "git status で現在の作業ディレクトリとステージングエリアの状態を確認できます。",
            10,
        ),
        q(
            "q5_git_push",
            QuizType::Commands,
            "ローカルの変更をリモートリポジトリに送信するコマンドは？",
            ["git upload", "git send", "git push", "git sync"],
            2,
            "git push でローカルリポジトリの変更をリモートリポジトリに送信できます。",
            10,
        ),
        q(
            "q6_git_pull",
            QuizType::Commands,
            "リモートリポジトリの最新変更を取得・統合するコマンドは？",
            ["git download", "git pull", "git fetch", "git get"],
            1,
            "git pull でリモートリポジトリの最新変更を取得し、現在のブランチに統合できます。",
            10,
        ),
        q(
            "q7_git_clone",
            QuizType::Commands,
            "リモートリポジトリをローカルにコピーするコマンドは？",
            ["git copy", "git clone", "git download", "git get"],
            1,
            "git clone でリモートリポジトリをローカルマシンに完全にコピーできます。",
            10,
        ),
        q(
            "q8_git_branch_create",
            QuizType::Commands,
            "新しいブランチを作成するコマンドは？",
            [
                "git branch new-branch",
                "git create branch new-branch",
                "git new new-branch",
                "git make new-branch",
            ],
            0,
            "git branch <ブランチ名> で新しいブランチを作成できます。",
            10,
        ),
        q(
            "q9_git_checkout",
            QuizType::Commands,
            "別のブランチに切り替えるコマンドは？",
            [
                "git switch branch-name",
                "git checkout branch-name",
                "git change branch-name",
                "git go branch-name",
            ],
            1,
            "git checkout <ブランチ名> で指定したブランチに切り替えできます。新しいバージョンではgit switchも使えます。",
            10,
        ),
        q(
            "q10_git_merge",
            QuizType::Commands,
            "現在のブランチに他のブランチをマージするコマンドは？",
            [
                "git merge branch-name",
                "git join branch-name",
                "git combine branch-name",
                "git add branch-name",
            ],
            0,
            "git merge <ブランチ名> で指定したブランチを現在のブランチに統合できます。",
            10,
        ),
        q(
            "q11_git_log",
            QuizType::Commands,
            "コミット履歴を表示するコマンドは？",
            ["git history", "git log", "git commits", "git show"],
            1,
            "git log でコミット履歴を時系列順に表示できます。",
            10,
        ),
        q(
            "q12_git_diff",
            QuizType::Commands,
            "ファイルの変更内容を表示するコマンドは？",
            ["git changes", "git diff", "git compare", "git show"],
            1,
            "git diff で作業ディレクトリとステージングエリアの差分を表示できます。",
            10,
        ),
        q(
            "q13_git_remote_add",
            QuizType::Commands,
            "リモートリポジトリを追加するコマンドは？",
            [
                "git remote add origin <URL>",
                "git add remote origin <URL>",
                "git connect origin <URL>",
                "git link origin <URL>",
            ],
            0,
            "git remote add origin <URL> でoriginという名前でリモートリポジトリを追加できます。",
            10,
        ),
        q(
            "q14_git_reset",
            QuizType::Commands,
            "ステージングエリアの変更を取り消すコマンドは？",
            [
                "git reset <file>",
                "git unstage <file>",
                "git remove <file>",
                "git undo <file>",
            ],
            0,
            "git reset <ファイル名> でステージングエリアから指定ファイルの変更を取り消せます。",
            10,
        ),
        q(
            "q15_git_stash",
            QuizType::Commands,
            "作業中の変更を一時的に保存するコマンドは？",
            ["git save", "git stash", "git temp", "git hold"],
            1,
            "git stash で現在の作業を一時的に保存し、後で復元できます。",
            10,
        ),
    ]);

    // workflow: 12 questions, 15 points each
    questions.extend([
        q(
            "q1_basic_workflow",
            QuizType::Workflow,
            "基本的なGitワークフローの正しい順序は？",
            [
                "edit → add → commit → push",
                "add → edit → commit → push",
                "commit → add → edit → push",
                "push → edit → add → commit",
            ],
            0,
            "基本的な順序は：1)ファイル編集 → 2)変更をステージング(add) → 3)コミット → 4)リモートにプッシュです。",
            15,
        ),
        q(
            "q2_collaboration_flow",
            QuizType::Workflow,
            "チーム開発での一般的なワークフローは？",
            [
                "main ブランチで直接作業",
                "feature ブランチで作業 → Pull Request → merge",
                "各自が別々のリポジトリで作業",
                "メールでコードを共有",
            ],
            1,
            "チーム開発では feature ブランチで作業し、Pull Request でコードレビューを経てからメインブランチにマージするのが一般的です。",
            15,
        ),
        q(
            "q3_pull_request_process",
            QuizType::Workflow,
            "Pull Request の一般的なプロセスは？",
            [
                "作成 → レビュー → 承認 → マージ",
                "作成 → マージ → レビュー → 承認",
                "レビュー → 作成 → 承認 → マージ",
                "マージ → 作成 → レビュー → 承認",
            ],
            0,
            "Pull Request は作成後、チームメンバーがレビューし、承認された後にマージされます。",
            15,
        ),
        q(
            "q4_conflict_resolution",
            QuizType::Workflow,
            "マージコンフリクトが発生した場合の対処法は？",
            [
                "無視して強制マージする",
                "手動で競合部分を解決してコミット",
                "片方のブランチを削除する",
                "プロジェクトを最初からやり直す",
            ],
            1,
            "マージコンフリクトは手動で競合部分を確認・修正し、解決後にコミットします。",
            15,
        ),
        q(
            "q5_gitignore_purpose",
            QuizType::Workflow,
            ".gitignore ファイルの目的は？",
            [
                "Git の設定を保存する",
                "バージョン管理から除外するファイルを指定",
                "プロジェクトの説明を書く",
                "コミットメッセージの雛形を保存",
            ],
            1,
            ".gitignore はバージョン管理したくないファイル（ビルド成果物、設定ファイルなど）を指定するためのファイルです。",
            15,
        ),
        q(
            "q6_branch_strategy",
            QuizType::Workflow,
            "Git Flow での一般的なブランチ戦略は？",
            [
                "main, develop, feature, release, hotfix",
                "master, slave, feature",
                "main, backup, feature",
                "production, staging, development",
            ],
            0,
            "Git Flow では main(本番), develop(開発), feature(機能), release(リリース), hotfix(緊急修正) の5種類のブランチを使います。",
            15,
        ),
        q(
            "q7_commit_best_practices",
            QuizType::Workflow,
            "良いコミットメッセージの特徴は？",
            [
                "長くて詳細な説明",
                "短くて分かりやすい説明",
                "日本語のみで記述",
                "絵文字をたくさん使用",
            ],
            1,
            "良いコミットメッセージは簡潔で分かりやすく、何を変更したかが一目で分かるものです。",
            15,
        ),
        q(
            "q8_code_review",
            QuizType::Workflow,
            "コードレビューで確認すべき点は？",
            [
                "コードの実行速度のみ",
                "機能性、可読性、セキュリティ、性能",
                "ファイル名の長さ",
                "コメントの文字数",
            ],
            1,
            "コードレビューでは機能が正しく動作するか、読みやすいか、セキュリティ問題がないか、性能に問題がないかを確認します。",
            15,
        ),
        q(
            "q9_continuous_integration",
            QuizType::Workflow,
            "CI/CD (継続的インテグレーション/デプロイ) の利点は？",
            [
                "コードを手動でテストする必要がない",
                "自動化により品質向上と迅速なデプロイが可能",
                "プログラマーが不要になる",
                "コストが完全に無料になる",
            ],
            1,
            "CI/CDにより自動テスト・ビルド・デプロイが実現し、品質の向上と迅速なリリースが可能になります。",
            15,
        ),
        q(
            "q10_release_management",
            QuizType::Workflow,
            "ソフトウェアリリース管理で重要なことは？",
            [
                "毎日リリースする",
                "機能完成後すぐリリース",
                "計画的なリリーススケジュールとテスト",
                "リリース内容を秘密にする",
            ],
            2,
            "リリース管理では計画的なスケジューリング、十分なテスト、ロールバック計画などが重要です。",
            15,
        ),
        q(
            "q11_issue_tracking",
            QuizType::Workflow,
            "GitHub Issues の主な用途は？",
            [
                "ソースコードの保存",
                "バグ報告と機能要求の管理",
                "ファイルのダウンロード",
                "プログラムの実行",
            ],
            1,
            "GitHub Issues はバグ報告、機能要求、タスク管理などプロジェクトの課題を追跡・管理するためのツールです。",
            15,
        ),
        q(
            "q12_documentation",
            QuizType::Workflow,
            "プロジェクトドキュメンテーションで最も重要なのは？",
            [
                "README.md ファイル",
                "実行ファイル",
                "バイナリファイル",
                "設定ファイル",
            ],
            0,
            "README.md はプロジェクトの説明、インストール方法、使用方法などを記載する最も重要なドキュメントです。",
            15,
        ),
    ]);

    questions
}
